//! Main Extractor struct and record assembly.
//!
//! This module contains the [`Extractor`], which routes each raw infobox
//! field through the dispatcher and merges the results into one
//! [`NormalizedRecord`].
//!
//! ## Example
//!
//! ```rust
//! use infoboxrs::{Extractor, RawInfobox};
//!
//! let infobox = RawInfobox {
//!     title: Some("American Animals".to_string()),
//!     director: Some("[[Bart Layton]]".to_string()),
//!     runtime: Some("117 minutes".to_string()),
//!     ..RawInfobox::default()
//! };
//!
//! let extractor = Extractor::new(None);
//! let record = extractor.extract(&infobox);
//!
//! assert_eq!(record.director, vec!["Bart Layton"]);
//! assert_eq!(record.running_time, Some(117));
//! ```

use std::collections::HashSet;

use crate::dispatch;
use crate::error::Result;
use crate::infobox::RawInfobox;
use crate::options::ExtractOptions;
use crate::record::NormalizedRecord;
use crate::runtime;

/// The record extraction engine.
///
/// An `Extractor` is cheap to build and holds only configuration; it keeps no
/// state between records, so one instance can be reused (or shared) across an
/// entire dump. Every accessor is total: malformed markup, missing keys and
/// unparseable values all collapse to the field's empty default rather than
/// failing the record.
///
/// ## Example
///
/// ```rust
/// use infoboxrs::{Extractor, RawInfobox};
///
/// let extractor = Extractor::new(None);
///
/// // Missing fields never fail; they come back empty.
/// let record = extractor.extract(&RawInfobox::default());
/// assert!(record.director.is_empty());
/// assert_eq!(record.running_time, None);
/// ```
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create a new Extractor
    ///
    /// # Arguments
    /// * `options` - Optional configuration options (defaults when `None`)
    pub fn new(options: Option<ExtractOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
        }
    }

    /// Assemble one normalized record from a raw infobox.
    ///
    /// Pure and deterministic over its input; records are independent, so
    /// callers may map this over a whole dump (in parallel if they like).
    pub fn extract(&self, infobox: &RawInfobox) -> NormalizedRecord {
        NormalizedRecord {
            title: self.title(infobox),
            director: self.director(infobox),
            starring: self.starring(infobox),
            running_time: self.running_time(infobox),
            country: self.country(infobox),
            language: self.language(infobox),
            categories: self.categories(infobox),
            text: self.text(infobox),
        }
    }

    /// Director names, or `[]` when the field is missing or unparseable.
    pub fn director(&self, infobox: &RawInfobox) -> Vec<String> {
        self.list_field("director", infobox.director.as_deref(), dispatch::director)
    }

    /// Cast names, or `[]` when the field is missing or unparseable.
    pub fn starring(&self, infobox: &RawInfobox) -> Vec<String> {
        self.list_field("starring", infobox.starring.as_deref(), dispatch::starring)
    }

    /// Production countries, or `[]` when the field is missing or unparseable.
    pub fn country(&self, infobox: &RawInfobox) -> Vec<String> {
        self.list_field("country", infobox.country.as_deref(), dispatch::country)
    }

    /// Languages, or `[]` when the field is missing or unparseable.
    pub fn language(&self, infobox: &RawInfobox) -> Vec<String> {
        self.list_field("language", infobox.language.as_deref(), dispatch::language)
    }

    /// Running time in minutes, or `None` when no duration was parseable.
    pub fn running_time(&self, infobox: &RawInfobox) -> Option<u32> {
        let raw = infobox.runtime.as_deref()?;
        match runtime::parse_duration(raw, self.options.hour_threshold) {
            Ok(minutes) => Some(minutes),
            Err(err) => {
                self.log(&format!("runtime dropped: {}", err));
                None
            }
        }
    }

    /// Page title pass-through; empty string when absent.
    pub fn title(&self, infobox: &RawInfobox) -> String {
        infobox.title.clone().unwrap_or_default()
    }

    /// Category pass-through; empty list when absent.
    pub fn categories(&self, infobox: &RawInfobox) -> Vec<String> {
        infobox.category.clone().unwrap_or_default()
    }

    /// Article text pass-through; empty string when absent.
    pub fn text(&self, infobox: &RawInfobox) -> String {
        infobox.text.clone().unwrap_or_default()
    }

    fn list_field(
        &self,
        name: &'static str,
        raw: Option<&str>,
        dispatch_fn: fn(Option<&str>) -> Result<Vec<String>>,
    ) -> Vec<String> {
        match dispatch_fn(raw) {
            Ok(names) => {
                self.log(&format!("{}: {} name(s)", name, names.len()));
                if self.options.dedupe {
                    dedupe(names)
                } else {
                    names
                }
            }
            Err(err) => {
                self.log(&format!("{} empty: {}", name, err));
                Vec::new()
            }
        }
    }

    /// Log a debug message (if the debug trace is enabled)
    fn log(&self, message: &str) {
        if self.options.debug {
            eprintln!("infoboxrs: (Extractor) {}", message);
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Extract one record with default options.
///
/// Convenience wrapper around [`Extractor::extract`].
///
/// ```rust
/// use infoboxrs::{extract, RawInfobox};
///
/// let infobox = RawInfobox {
///     director: Some("[[Tony Trov]] and [[Johnny Zito]]".to_string()),
///     ..RawInfobox::default()
/// };
///
/// assert_eq!(extract(&infobox).director, vec!["Tony Trov", "Johnny Zito"]);
/// ```
pub fn extract(infobox: &RawInfobox) -> NormalizedRecord {
    Extractor::new(None).extract(infobox)
}

fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|name| seen.insert(name.clone())).collect()
}

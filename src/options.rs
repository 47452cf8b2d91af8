//! Configuration options for record extraction.
//!
//! This module provides [`ExtractOptions`] and [`ExtractOptionsBuilder`] for
//! configuring the behavior of the field extraction engine.
//!
//! ## Example
//!
//! ```rust
//! use infoboxrs::{ExtractOptions, Extractor};
//!
//! // Using default options
//! let extractor = Extractor::new(None);
//!
//! // Using builder for custom options
//! let options = ExtractOptions::builder()
//!     .dedupe(true)
//!     .debug(true)
//!     .build();
//!
//! let extractor = Extractor::new(Some(options));
//! # let _ = extractor;
//! ```

/// Configuration options for the extraction engine.
///
/// ## Creating Options
///
/// ### Using Default
///
/// ```rust
/// use infoboxrs::ExtractOptions;
///
/// let options = ExtractOptions::default();
/// ```
///
/// ### Using Builder
///
/// ```rust
/// use infoboxrs::ExtractOptions;
///
/// let options = ExtractOptions::builder()
///     .hour_threshold(2)
///     .dedupe(false)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Enable a strategy-selection trace to stderr.
    ///
    /// When enabled, the extractor reports which fields dispatched to which
    /// strategy and why a field came back empty. Useful for understanding
    /// extraction behavior on a misbehaving dump entry.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Cutoff for single-number duration inference.
    ///
    /// When a running-time string yields only one number, values above the
    /// threshold are taken as minutes and values at or below it as hours.
    /// The default of `2` is a compatibility constant: changing it changes
    /// what previously extracted dumps would have contained.
    ///
    /// Default: `2`
    pub hour_threshold: u32,

    /// Drop repeated names from list fields, keeping the first occurrence.
    ///
    /// Off by default: the extraction contract preserves raw source order
    /// including duplicates.
    ///
    /// Default: `false`
    pub dedupe: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            debug: false,
            hour_threshold: 2,
            dedupe: false,
        }
    }
}

impl ExtractOptions {
    /// Creates a new builder for ExtractOptions
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }
}

/// Builder for [`ExtractOptions`].
///
/// Provides a fluent interface for constructing [`ExtractOptions`] with
/// custom values.
///
/// ## Example
///
/// ```rust
/// use infoboxrs::ExtractOptions;
///
/// let options = ExtractOptions::builder()
///     .debug(true)
///     .dedupe(true)
///     .build();
/// ```
#[derive(Default)]
pub struct ExtractOptionsBuilder {
    debug: Option<bool>,
    hour_threshold: Option<u32>,
    dedupe: Option<bool>,
}

impl ExtractOptionsBuilder {
    /// Enable or disable the debug trace
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set the single-number duration cutoff
    pub fn hour_threshold(mut self, threshold: u32) -> Self {
        self.hour_threshold = Some(threshold);
        self
    }

    /// Enable or disable deduplication of list fields
    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = Some(dedupe);
        self
    }

    /// Build the ExtractOptions
    pub fn build(self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        ExtractOptions {
            debug: self.debug.unwrap_or(defaults.debug),
            hour_threshold: self.hour_threshold.unwrap_or(defaults.hour_threshold),
            dedupe: self.dedupe.unwrap_or(defaults.dedupe),
        }
    }
}

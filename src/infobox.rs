//! Raw infobox data structure: the input to extraction.
//!
//! A [`RawInfobox`] is one page's worth of semi-structured markup fields as
//! delivered by an upstream fetch/cache layer (typically a JSON dump keyed by
//! page identifier). The core only reads it; the fetch layer is responsible
//! for resolving page titles, categories and article text into it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw markup fields for a single page.
///
/// Every field is optional: a page may lack an infobox entirely, or its
/// infobox may omit any individual key. Extraction treats an absent field the
/// same as an unparseable one: the corresponding output field comes back
/// empty.
///
/// Keys outside the fixed vocabulary (raw dumps carry things like `image`,
/// `producer`, `budget`) are preserved in [`extra`](RawInfobox::extra) and
/// ignored by the core.
///
/// ## Deserialization
///
/// The struct deserializes straight from a raw dump entry:
///
/// ```rust
/// use infoboxrs::RawInfobox;
///
/// let infobox: RawInfobox = serde_json::from_str(
///     r#"{"title": "2.0", "director": "[[S. Shankar|Shankar]]", "budget": "₹543 crore"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(infobox.title.as_deref(), Some("2.0"));
/// assert!(infobox.extra.contains_key("budget"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawInfobox {
    /// Page title, resolved by the fetch layer
    pub title: Option<String>,
    /// Raw director markup
    pub director: Option<String>,
    /// Raw cast markup
    pub starring: Option<String>,
    /// Raw running-time markup
    pub runtime: Option<String>,
    /// Raw country markup
    pub country: Option<String>,
    /// Raw language markup
    pub language: Option<String>,
    /// Plain article text, passed through untouched
    pub text: Option<String>,
    /// Category labels, already split by the fetch layer
    pub category: Option<Vec<String>>,
    /// Infobox keys the core does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_dump_entry() {
        let infobox: RawInfobox = serde_json::from_str(r#"{"starring": "Suzi Ewing"}"#).unwrap();
        assert_eq!(infobox.starring.as_deref(), Some("Suzi Ewing"));
        assert!(infobox.director.is_none());
        assert!(infobox.category.is_none());
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let infobox: RawInfobox =
            serde_json::from_str(r#"{"image": "poster.jpg", "runtime": "102 min"}"#).unwrap();
        assert_eq!(infobox.runtime.as_deref(), Some("102 min"));
        assert_eq!(
            infobox.extra.get("image").and_then(|v| v.as_str()),
            Some("poster.jpg")
        );
    }
}

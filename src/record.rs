//! Normalized record: the output entity of extraction.
//!
//! One [`NormalizedRecord`] is produced per input page, independent of which
//! raw markup convention the source fields used. Records are created fresh
//! per extraction, never mutated afterwards, and carry no cross-record state.

use serde::{Deserialize, Serialize};

/// A uniformly shaped record extracted from one page's raw infobox.
///
/// List fields preserve raw source order and are not deduplicated by default
/// (see [`ExtractOptions::dedupe`](crate::ExtractOptions)). Absent or
/// unparseable source fields come back as empty lists, an empty string, or
/// `None`, never as an error.
///
/// ## Serialization
///
/// Field names serialize with the spelling the legacy JSON output used
/// (`Title`, `Director`, ..., `Running time`), so existing consumers of
/// extracted dumps keep working:
///
/// ```rust
/// use infoboxrs::{extract, RawInfobox};
///
/// let infobox = RawInfobox {
///     title: Some("Night Hunter".to_string()),
///     runtime: Some("98 minutes".to_string()),
///     ..RawInfobox::default()
/// };
///
/// let record = extract(&infobox);
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["Title"], "Night Hunter");
/// assert_eq!(json["Running time"], 98);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedRecord {
    /// Page title; empty string when the fetch layer supplied none
    pub title: String,

    /// Director names, in source order
    pub director: Vec<String>,

    /// Cast names, in source order
    pub starring: Vec<String>,

    /// Running time in whole minutes; `None` when no duration was parseable
    #[serde(rename = "Running time")]
    pub running_time: Option<u32>,

    /// Production countries
    pub country: Vec<String>,

    /// Languages
    pub language: Vec<String>,

    /// Category labels, passed through from the fetch layer
    pub categories: Vec<String>,

    /// Plain article text, passed through untouched
    pub text: String,
}

//! Quick extractability check without full record assembly.
//!
//! This module provides [`is_probably_extractable`], a fast pre-flight check
//! to determine whether a raw infobox would yield anything beyond an all-empty
//! record.
//!
//! ## Use Case
//!
//! Use this to filter a large dump before extracting, skipping pages whose
//! infobox carries none of the fields the core interprets:
//!
//! ```rust
//! use infoboxrs::{extract, is_probably_extractable, RawInfobox};
//!
//! let infobox = RawInfobox {
//!     runtime: Some("102 min".to_string()),
//!     ..RawInfobox::default()
//! };
//!
//! if is_probably_extractable(&infobox) {
//!     let record = extract(&infobox);
//!     assert_eq!(record.running_time, Some(102));
//! }
//! ```

use crate::infobox::RawInfobox;

/// Quick check whether extraction would produce a non-trivial record.
///
/// Returns `true` when at least one of the five interpreted fields
/// (director, starring, runtime, country, language) is present and not
/// blank. Title, text and categories are pass-throughs and do not count:
/// a page with only those produces a record the extraction engine added
/// nothing to.
///
/// This is a presence check, not a parse: a field full of markup noise can
/// still come back empty from the full extraction.
pub fn is_probably_extractable(infobox: &RawInfobox) -> bool {
    [
        infobox.director.as_deref(),
        infobox.starring.as_deref(),
        infobox.runtime.as_deref(),
        infobox.country.as_deref(),
        infobox.language.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_infobox_is_not_extractable() {
        assert!(!is_probably_extractable(&RawInfobox::default()));
    }

    #[test]
    fn pass_through_fields_do_not_count() {
        let infobox = RawInfobox {
            title: Some("Some Page".to_string()),
            text: Some("Article body.".to_string()),
            category: Some(vec!["2018 films".to_string()]),
            ..RawInfobox::default()
        };
        assert!(!is_probably_extractable(&infobox));
    }

    #[test]
    fn any_interpreted_field_counts() {
        let infobox = RawInfobox {
            language: Some("Tamil".to_string()),
            ..RawInfobox::default()
        };
        assert!(is_probably_extractable(&infobox));
    }

    #[test]
    fn blank_values_do_not_count() {
        let infobox = RawInfobox {
            director: Some("   ".to_string()),
            ..RawInfobox::default()
        };
        assert!(!is_probably_extractable(&infobox));
    }
}

//! # infoboxrs
//!
//! Heuristic extraction of normalized film records from wiki infobox markup.
//!
//! ## Overview
//!
//! Encyclopedia infoboxes encode the same information in wildly inconsistent
//! textual conventions: bulleted `{{Plainlist|...}}` templates, `{{ubl|...}}`
//! bodies, `<br>`-separated names, comma lists, bare `[[...]]` links, and
//! free-form duration strings. infoboxrs converts one page's raw fields into
//! a single uniformly shaped [`NormalizedRecord`]: director, cast, country
//! and language as clean name lists, the running time as integer minutes,
//! plus title, categories and article text passed through.
//!
//! The engine is a set of content-sniffing dispatch rules over a small
//! library of pattern matchers. It is deliberately not a general wikitext
//! parser: it reproduces the specific extraction behavior needed for the
//! known family of infobox shapes, and it is total: malformed markup and
//! missing fields yield empty fields, never errors.
//!
//! ## Key Features
//!
//! - **Marker-based dispatch**: each field picks its matcher from the markup
//!   it actually contains, in a fixed priority order
//! - **Runtime normalization**: duration strings in mixed conventions become
//!   integer minutes under an explicit unit-inference policy
//! - **Total extraction**: any input, including an empty infobox, produces a
//!   well-typed record
//! - **Pre-flight check**: [`is_probably_extractable`] skips pages that would
//!   produce an all-empty record
//!
//! ## Basic Usage
//!
//! ```rust
//! use infoboxrs::{extract, RawInfobox};
//!
//! let infobox = RawInfobox {
//!     title: Some("Hit the Road".to_string()),
//!     director: Some("[[Jafar Panahi]]".to_string()),
//!     starring: Some("[[Behnaz Jafari]]<br />Jafar Panahi<br />Marziyeh Rezaei".to_string()),
//!     runtime: Some("2h 35min".to_string()),
//!     ..RawInfobox::default()
//! };
//!
//! let record = extract(&infobox);
//! assert_eq!(record.director, vec!["Jafar Panahi"]);
//! assert_eq!(record.starring.len(), 3);
//! assert_eq!(record.running_time, Some(155));
//! ```
//!
//! ## Custom Options
//!
//! ```rust
//! use infoboxrs::{ExtractOptions, Extractor, RawInfobox};
//!
//! let options = ExtractOptions::builder()
//!     .dedupe(true)
//!     .build();
//!
//! let extractor = Extractor::new(Some(options));
//! let record = extractor.extract(&RawInfobox::default());
//! assert!(record.starring.is_empty());
//! ```
//!
//! ## Batch Processing
//!
//! Records are independent and extraction is pure, so a whole dump is just a
//! map over its entries; the id-to-record aggregation stays with the caller:
//!
//! ```rust
//! use infoboxrs::{extract, is_probably_extractable, NormalizedRecord, RawInfobox};
//! use std::collections::BTreeMap;
//!
//! let dump: BTreeMap<String, RawInfobox> = BTreeMap::new();
//! let records: BTreeMap<&String, NormalizedRecord> = dump
//!     .iter()
//!     .filter(|(_, infobox)| is_probably_extractable(infobox))
//!     .map(|(id, infobox)| (id, extract(infobox)))
//!     .collect();
//! # let _ = records;
//! ```

mod dispatch;
mod error;
mod extractable;
mod extractor;
mod infobox;
mod matchers;
mod options;
mod patterns;
mod record;
mod runtime;

// Public exports
pub use error::{ExtractError, Result};
pub use extractable::is_probably_extractable;
pub use extractor::{extract, Extractor};
pub use infobox::RawInfobox;
pub use options::ExtractOptions;
pub use record::NormalizedRecord;

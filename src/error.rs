//! Error types for the extraction library.

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting a single field.
///
/// These never escape [`Extractor::extract`](crate::Extractor::extract): the
/// assembler recovers every variant into the field's empty default (`[]` for
/// lists, `None` for the running time). They surface only through the
/// per-field dispatch layer and the opt-in debug trace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The field is absent from the raw infobox
    #[error("field `{0}` missing from raw infobox")]
    MissingField(&'static str),

    /// The field is present but no pattern captured any token
    #[error("no pattern captured a token from {0:?}")]
    UnparseableValue(String),

    /// The markup matched a pattern but the captured value is unusable
    /// (e.g. a duration number that overflows)
    #[error("malformed markup: {0:?}")]
    MalformedMarkup(String),
}

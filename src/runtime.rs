//! Running-time normalization.
//!
//! Converts free-form duration strings (`"147 minutes"`, `"102 min"`,
//! `"2h 35min"`, `"2 hours 19 minutes"`) into integer minutes. Only the first
//! duration in the string counts; trailing alternates such as a second
//! dubbed-language runtime are ignored.

use crate::error::{ExtractError, Result};
use crate::patterns::PATTERNS;

/// Parse a duration string into minutes.
///
/// The pattern captures up to two numbers with optional unit words between
/// them. With two numbers the first is hours and the second minutes. With a
/// single number the unit is inferred from `hour_threshold`: values above it
/// are taken as minutes, values at or below it as hours. The default
/// threshold of 2 must be kept for compatibility with previously extracted
/// data (it is what separates `"2 hours"` from `"147 minutes"` when no unit
/// word survives the match).
pub(crate) fn parse_duration(raw: &str, hour_threshold: u32) -> Result<u32> {
    let caps = PATTERNS
        .duration
        .captures(raw)
        .ok_or_else(|| ExtractError::UnparseableValue(raw.to_string()))?;

    let first: u32 = caps
        .get(1)
        .ok_or_else(|| ExtractError::UnparseableValue(raw.to_string()))?
        .as_str()
        .parse()
        .map_err(|_| ExtractError::MalformedMarkup(raw.to_string()))?;
    let second = caps.get(2).map_or("", |m| m.as_str());

    if second.is_empty() {
        if first > hour_threshold {
            Ok(first)
        } else {
            first
                .checked_mul(60)
                .ok_or_else(|| ExtractError::MalformedMarkup(raw.to_string()))
        }
    } else {
        let minutes: u32 = second
            .parse()
            .map_err(|_| ExtractError::MalformedMarkup(raw.to_string()))?;
        first
            .checked_mul(60)
            .and_then(|hours| hours.checked_add(minutes))
            .ok_or_else(|| ExtractError::MalformedMarkup(raw.to_string()))
    }
}

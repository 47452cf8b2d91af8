//! Field dispatcher: content sniffing and strategy selection.
//!
//! Each multi-valued field carries a priority-ordered rule table of
//! `(marker set, strategy)` pairs. The raw string is sniffed once into a
//! [`Markers`] set and the first rule whose markers intersect it wins, so the
//! priority order is plain data rather than nested conditionals. The country
//! field does not fit the table shape and keeps a bespoke path.

use bitflags::bitflags;

use crate::error::{ExtractError, Result};
use crate::matchers;

bitflags! {
    /// Discriminating marker substrings found in a raw field value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct Markers: u8 {
        /// A `*` bullet anywhere in the value
        const BULLET = 1 << 0;
        /// An `ubl|` or `list|` template head
        const TEMPLATE_LIST = 1 << 1;
        /// A `br` substring (covers `<br>`, `<br/>`, `<br />`)
        const LINE_BREAK = 1 << 2;
        /// A plain comma
        const COMMA = 1 << 3;
        /// A `[[` link opener
        const LINK = 1 << 4;
        /// A `{` template opener
        const TEMPLATE = 1 << 5;
    }
}

/// Sniff a raw value for every dispatch marker in one pass.
pub(crate) fn sniff(raw: &str) -> Markers {
    let mut markers = Markers::empty();
    if raw.contains('*') {
        markers |= Markers::BULLET;
    }
    if raw.contains("ubl|") || raw.contains("list|") {
        markers |= Markers::TEMPLATE_LIST;
    }
    if raw.contains("br") {
        markers |= Markers::LINE_BREAK;
    }
    if raw.contains(',') {
        markers |= Markers::COMMA;
    }
    if raw.contains("[[") {
        markers |= Markers::LINK;
    }
    if raw.contains('{') {
        markers |= Markers::TEMPLATE;
    }
    markers
}

/// How a raw value gets turned into a token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    Bulleted,
    LineBreak,
    Comma,
    BracketLink,
    Fuzzy,
    /// The whole trimmed value as a one-element list
    Single,
}

const DIRECTOR_RULES: &[(Markers, Strategy)] = &[
    (Markers::BULLET, Strategy::Bulleted),
    (Markers::LINK, Strategy::BracketLink),
];

const STARRING_RULES: &[(Markers, Strategy)] = &[
    (
        Markers::BULLET.union(Markers::TEMPLATE_LIST),
        Strategy::Bulleted,
    ),
    (Markers::LINE_BREAK, Strategy::LineBreak),
    (Markers::COMMA, Strategy::Comma),
    (Markers::LINK, Strategy::BracketLink),
];

const LANGUAGE_RULES: &[(Markers, Strategy)] = &[(
    Markers::BULLET.union(Markers::TEMPLATE_LIST),
    Strategy::Bulleted,
)];

/// First rule whose markers intersect the sniffed set wins.
fn select(rules: &[(Markers, Strategy)], markers: Markers, fallback: Strategy) -> Strategy {
    rules
        .iter()
        .find(|(wanted, _)| markers.intersects(*wanted))
        .map(|(_, strategy)| *strategy)
        .unwrap_or(fallback)
}

fn apply(strategy: Strategy, raw: &str) -> Result<Vec<String>> {
    let names: Vec<String> = match strategy {
        Strategy::Bulleted => matchers::bulleted_list(raw).collect(),
        Strategy::LineBreak => matchers::line_break_list(raw).collect(),
        Strategy::Comma => matchers::comma_list(raw).collect(),
        Strategy::BracketLink => matchers::bracket_link_list(raw).collect(),
        Strategy::Fuzzy => matchers::fuzzy_tokens(raw).collect(),
        Strategy::Single => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        }
    };
    if names.is_empty() {
        return Err(ExtractError::UnparseableValue(raw.to_string()));
    }
    Ok(names)
}

fn require<'a>(raw: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    raw.ok_or(ExtractError::MissingField(field))
}

pub(crate) fn director(raw: Option<&str>) -> Result<Vec<String>> {
    let raw = require(raw, "director")?;
    apply(select(DIRECTOR_RULES, sniff(raw), Strategy::Single), raw)
}

pub(crate) fn starring(raw: Option<&str>) -> Result<Vec<String>> {
    let raw = require(raw, "starring")?;
    apply(select(STARRING_RULES, sniff(raw), Strategy::Single), raw)
}

pub(crate) fn language(raw: Option<&str>) -> Result<Vec<String>> {
    let raw = require(raw, "language")?;
    apply(select(LANGUAGE_RULES, sniff(raw), Strategy::Fuzzy), raw)
}

/// Country does not fit the rule table: template-wrapped values are cut at the
/// first literal `ref` (citation templates follow it) and pipe-split, and for
/// known list templates the leading token is the template name, not a country.
///
/// The legacy pipeline returned the no-`ubl`/`list` template case as a single
/// nested element; this implementation flattens it to a plain list like every
/// other field.
pub(crate) fn country(raw: Option<&str>) -> Result<Vec<String>> {
    let raw = require(raw, "country")?;
    let names: Vec<String> = if !sniff(raw).contains(Markers::TEMPLATE) {
        matchers::fuzzy_tokens(raw).collect()
    } else {
        let head = raw.split("ref").next().unwrap_or(raw);
        let tokens = matchers::template_tokens(head);
        if raw.contains("ubl") || raw.contains("list") {
            tokens.skip(1).collect()
        } else {
            tokens.collect()
        }
    };
    if names.is_empty() {
        return Err(ExtractError::UnparseableValue(raw.to_string()));
    }
    Ok(names)
}

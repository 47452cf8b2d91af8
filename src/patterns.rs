//! Compiled regular expressions backing the pattern matchers.
//!
//! Every pattern is compiled exactly once via [`Lazy`] and shared through the
//! [`PATTERNS`] static. The capture groups are relied upon by index in
//! `matchers`, so reordering groups here is a breaking change.

use once_cell::sync::Lazy;
use regex::Regex;

/// The fixed set of markup conventions the extractor recognizes.
pub(crate) struct Patterns {
    /// `*`/`|`-prefixed list items, optionally wrapped in `[[...]]` links.
    ///
    /// Handles `{{Plainlist|...}}`, `{{Unbulleted list|...}}` and `{{ubl|...}}`
    /// bodies as well as bare `*`-bulleted lines. Capture 1 is the item.
    pub bulleted: Regex,

    /// Items separated by `<br>`/`<br />` markers, with optional `and`/`with`
    /// connector words before an item. Capture 3 is the item.
    pub line_break: Regex,

    /// `[[Name]]` link spans joined by arbitrary plain text. Capture 1 is the
    /// span body, pipe targets (`[[A|B]]`) kept verbatim.
    pub bracket_link: Regex,

    /// Comma-separated plain names. Capture 1 is the segment.
    pub comma: Regex,

    /// Tolerant single-value fallback: a token with stray brackets, break
    /// markers, commas or slashes around it. Capture 1 is the token.
    pub fuzzy: Regex,

    /// Pipe-delimited tokens inside a `{{...}}` template body. Capture 1 is
    /// the token; the template name itself also matches and is dropped by the
    /// dispatcher where appropriate.
    pub template: Regex,

    /// A duration: `<number> [hours-word] <number> [minutes-word]`, either
    /// number optional in the source text. Capture 1 is the first number,
    /// capture 2 the (possibly empty) second.
    pub duration: Regex,
}

pub(crate) static PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    bulleted: Regex::new(r"[*|]+ ?\[*([-\w()|.' ]+[\w.])\]*").unwrap(),
    line_break: Regex::new(r"(<br ?/?>)?(and|with)? ?\[*([-\w()|.' ]+[\w.])\]* ?(<br ?/?>)?")
        .unwrap(),
    bracket_link: Regex::new(r"\[+([-\w()|.' ]+)\]+").unwrap(),
    comma: Regex::new(r",?([-\w()|.' ]+[\w.]),?").unwrap(),
    fuzzy: Regex::new(r"[*\[]* ?([-\w| ]+\w)\]* ?(<br ?/?>)*,*/* ?").unwrap(),
    template: Regex::new(r"[*|]* ?([\w(). ]+) ?").unwrap(),
    duration: Regex::new(r"(\d+) ?[hours]* ?(\d*) ?[minutes]*").unwrap(),
});

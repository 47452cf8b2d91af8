//! Pattern library: one matcher per markup convention.
//!
//! Each matcher applies its pattern left to right, non-overlapping, and yields
//! one cleaned token per match. Matchers are lazy (plain iterators) and total:
//! a string in some other convention simply yields nothing.
//!
//! Cleaning is shared across all matchers: leading/trailing whitespace and the
//! bracket characters `[`, `]`, `*`, `|` are trimmed from every token and
//! empty captures are discarded. Matching is case-preserving and interior
//! punctuation is kept verbatim (so `[[Odia language|Odia]]` yields the pipe
//! target untouched).

use crate::patterns::PATTERNS;

/// Trim whitespace and stray bracket characters, dropping empty tokens.
fn clean_token(token: &str) -> Option<String> {
    let cleaned =
        token.trim_matches(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | '*' | '|'));
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Items of a bulleted or pipe-delimited list (`{{Plainlist|...}}`,
/// `{{ubl|...}}`, bare `*` lines).
pub(crate) fn bulleted_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    PATTERNS
        .bulleted
        .captures_iter(raw)
        .filter_map(|caps| clean_token(caps.get(1)?.as_str()))
}

/// Items separated by `<br>` markers; `and`/`with` connector words are
/// discarded.
pub(crate) fn line_break_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    PATTERNS
        .line_break
        .captures_iter(raw)
        .filter_map(|caps| clean_token(caps.get(3)?.as_str()))
}

/// Bodies of `[[...]]` link spans joined by plain text.
pub(crate) fn bracket_link_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    PATTERNS
        .bracket_link
        .captures_iter(raw)
        .filter_map(|caps| clean_token(caps.get(1)?.as_str()))
}

/// Comma-separated plain names.
pub(crate) fn comma_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    PATTERNS
        .comma
        .captures_iter(raw)
        .filter_map(|caps| clean_token(caps.get(1)?.as_str()))
}

/// Best-effort tokens from a single-value field with stray bracket, break or
/// separator noise.
pub(crate) fn fuzzy_tokens(raw: &str) -> impl Iterator<Item = String> + '_ {
    PATTERNS
        .fuzzy
        .captures_iter(raw)
        .filter_map(|caps| clean_token(caps.get(1)?.as_str()))
}

/// Pipe-split tokens of a `{{...}}` template body. The leading token is the
/// template name; callers drop it where the template is a known list wrapper.
pub(crate) fn template_tokens(raw: &str) -> impl Iterator<Item = String> + '_ {
    PATTERNS
        .template
        .captures_iter(raw)
        .filter_map(|caps| clean_token(caps.get(1)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(iter: impl Iterator<Item = String>) -> Vec<String> {
        iter.collect()
    }

    #[test]
    fn bulleted_plainlist() {
        let raw = "{{Plainlist|\n* [[Abbi Jacobson]]\n* [[Dave Franco]]\n* Charlotte Carel\n* Madeline Carel\n* Dawan Owens\n* Jen Tullock\n* [[Maya Erskine]]\n* [[Tim Matheson]]\n* [[Jane Kaczmarek]]}}";
        let names = collect(bulleted_list(raw));
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Abbi Jacobson");
        assert_eq!(names[2], "Charlotte Carel");
        assert_eq!(names[8], "Jane Kaczmarek");
    }

    #[test]
    fn bulleted_unbulleted_template() {
        let raw = "{{Unbulleted list|[[Rajinikanth]]|[[Akshay Kumar]]|[[Amy Jackson]]|[[Sudhanshu Pandey]]}}";
        let names = collect(bulleted_list(raw));
        assert_eq!(
            names,
            vec!["Rajinikanth", "Akshay Kumar", "Amy Jackson", "Sudhanshu Pandey"]
        );
    }

    #[test]
    fn bulleted_bare_lines() {
        let raw = "*Natasha Museveni Karugire\n*Sharpe Ssewali";
        let names = collect(bulleted_list(raw));
        assert_eq!(names, vec!["Natasha Museveni Karugire", "Sharpe Ssewali"]);
    }

    // One name per bullet/pipe-prefixed line with non-empty content; the
    // template header line itself contributes nothing.
    #[test]
    fn bulleted_count_matches_items() {
        let raw = "{{Plainlist|\n* [[Michael Rainey Jr.]]}}";
        assert_eq!(collect(bulleted_list(raw)), vec!["Michael Rainey Jr."]);
    }

    #[test]
    fn line_break_mixed_links() {
        let raw = "[[Behnaz Jafari]]<br />Jafar Panahi<br />Marziyeh Rezaei<br />Maedeh Erteghaei";
        let names = collect(line_break_list(raw));
        assert_eq!(
            names,
            vec!["Behnaz Jafari", "Jafar Panahi", "Marziyeh Rezaei", "Maedeh Erteghaei"]
        );
    }

    #[test]
    fn line_break_discards_connectors() {
        let raw = "[[Scott Adkins]]<br>[[Ray Stevenson]]<br>[[David Paymer]]<br>[[Ray Park]]<br>with [[Michael Jai White]]<br>and [[Ashley Greene]]";
        let names = collect(line_break_list(raw));
        assert_eq!(names.len(), 6);
        assert_eq!(names[4], "Michael Jai White");
        assert_eq!(names[5], "Ashley Greene");
    }

    #[test]
    fn bracket_links_joined_by_text() {
        let raw = "[[Tony Trov]] and [[Johnny Zito]]";
        let names = collect(bracket_link_list(raw));
        assert_eq!(names, vec!["Tony Trov", "Johnny Zito"]);
    }

    #[test]
    fn bracket_link_keeps_pipe_target() {
        let raw = "[[Amr Gamal (director)|Amr Gamal]]";
        let names = collect(bracket_link_list(raw));
        assert_eq!(names, vec!["Amr Gamal (director)|Amr Gamal"]);
    }

    #[test]
    fn comma_list_trims_segments() {
        let raw = "Paris Hilton, Josh Ostrovsky, Kirill Bichutsky, Brittany Furlan, Hailey Baldwin, DJ Khaled, Emily Ratajkowski";
        let names = collect(comma_list(raw));
        assert_eq!(names.len(), 7);
        assert!(names.iter().all(|n| !n.is_empty() && n.trim() == n));
        assert_eq!(names[0], "Paris Hilton");
        assert_eq!(names[6], "Emily Ratajkowski");
    }

    #[test]
    fn fuzzy_tolerates_breaks_and_slashes() {
        assert_eq!(
            collect(fuzzy_tokens("Germany<br>Austria<br>France")),
            vec!["Germany", "Austria", "France"]
        );
        assert_eq!(
            collect(fuzzy_tokens("Australia/[[Sri Lanka]]")),
            vec!["Australia", "Sri Lanka"]
        );
        assert_eq!(
            collect(fuzzy_tokens("[[India]]<br>[[Canada]] <br> [[Australia]]")),
            vec!["India", "Canada", "Australia"]
        );
    }

    #[test]
    fn template_tokens_split_on_pipes() {
        assert_eq!(
            collect(template_tokens("{{hlist|Argentina|Mexico}}")),
            vec!["hlist", "Argentina", "Mexico"]
        );
        assert_eq!(collect(template_tokens("{{US}}")), vec!["US"]);
    }

    #[test]
    fn empty_captures_are_discarded() {
        assert!(collect(bulleted_list("")).is_empty());
        assert!(collect(comma_list("   ")).is_empty());
        assert!(collect(bracket_link_list("no links here")).is_empty());
    }
}

//! Line classification
//!
//! Decides whether a physical line is a comment under a [`LanguageProfile`]
//! and recovers the comment text with all comment marks removed.

use crate::lang::{BlockMarkers, LanguageProfile};

/// Text of a comment line, markers and surrounding whitespace removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPayload<'a> {
    text: &'a str,
}

impl<'a> CommentPayload<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// True for comment lines carrying no text, such as a lone `##`
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Classify one line under `profile`.
///
/// Returns `None` for blank lines and for anything that is not a comment.
/// Line comments use the longest matching prefix, then drop further marker
/// runs glued to it or standing alone, so `## x`, `# # x` and `#x` all give
/// `x` while `-- -v` keeps `-v`. A block comment only counts when it opens
/// and closes on this very line.
pub fn classify<'a>(line: &'a str, profile: &LanguageProfile) -> Option<CommentPayload<'a>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(prefix) = profile.longest_prefix(trimmed) {
        let rest = strip_marker_run(&trimmed[prefix.len()..], profile);
        return Some(CommentPayload {
            text: strip_right_border(rest, profile),
        });
    }

    profile
        .block
        .and_then(|block| block_inner(trimmed, block))
        .map(|text| CommentPayload { text })
}

/// Drop the marker run glued to the prefix (`####x`), then every standalone
/// run followed by whitespace (`# # x`). A run glued to a word is text.
fn strip_marker_run<'a>(text: &'a str, profile: &LanguageProfile) -> &'a str {
    let is_marker = |c: char| profile.is_marker_char(c);
    let mut rest = text.trim_start_matches(is_marker).trim_start();
    loop {
        let after = rest.trim_start_matches(is_marker);
        if after.len() == rest.len() || after.starts_with(|c: char| !c.is_whitespace()) {
            return rest;
        }
        rest = after.trim_start();
    }
}

/// Drop a decorative border such as the trailing `#` of `# text #`.
///
/// Marker characters glued to a word (`c#`) are part of the text.
fn strip_right_border<'a>(text: &'a str, profile: &LanguageProfile) -> &'a str {
    let text = text.trim_end();
    let without = text.trim_end_matches(|c: char| profile.is_marker_char(c));
    if without.len() == text.len() {
        text
    } else if without.is_empty() || without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        text
    }
}

fn block_inner(text: &str, block: BlockMarkers) -> Option<&str> {
    let inner = text.strip_prefix(block.open)?.strip_suffix(block.close)?;
    Some(inner.trim_start_matches('*').trim_end_matches('*').trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DASH_PROFILE, HASH_PROFILE, ML_PROFILE, SLASH_PROFILE, TLA_PROFILE};

    fn text_of(line: &str, profile: &LanguageProfile) -> Option<String> {
        classify(line, profile).map(|p| p.text().to_string())
    }

    #[test]
    fn test_hash_comment() {
        assert_eq!(text_of("# Tutorial", &HASH_PROFILE).as_deref(), Some("Tutorial"));
    }

    #[test]
    fn test_double_hash_leaves_no_marker() {
        assert_eq!(
            text_of("## Tutorial #1: demo", &HASH_PROFILE).as_deref(),
            Some("Tutorial #1: demo")
        );
    }

    #[test]
    fn test_spaced_repeated_markers() {
        assert_eq!(text_of("# # KWords: a", &HASH_PROFILE).as_deref(), Some("KWords: a"));
        assert_eq!(text_of("####KWords: a", &HASH_PROFILE).as_deref(), Some("KWords: a"));
        assert_eq!(text_of("/// KWords: a", &SLASH_PROFILE).as_deref(), Some("KWords: a"));
    }

    #[test]
    fn test_marker_char_leading_a_word_is_kept() {
        assert_eq!(text_of("-- -v flag", &DASH_PROFILE).as_deref(), Some("-v flag"));
        assert_eq!(text_of("// /usr/bin", &SLASH_PROFILE).as_deref(), Some("/usr/bin"));
        assert_eq!(text_of("# #define X", &HASH_PROFILE).as_deref(), Some("#define X"));
        assert_eq!(text_of("# #", &HASH_PROFILE).as_deref(), Some(""));
    }

    #[test]
    fn test_indented_comment() {
        assert_eq!(text_of("   \t-- Tutorial", &DASH_PROFILE).as_deref(), Some("Tutorial"));
    }

    #[test]
    fn test_blank_and_code_lines_are_not_comments() {
        assert_eq!(text_of("", &HASH_PROFILE), None);
        assert_eq!(text_of("   ", &HASH_PROFILE), None);
        assert_eq!(text_of("echo hello", &HASH_PROFILE), None);
        assert_eq!(text_of("# not a C comment", &SLASH_PROFILE), None);
    }

    #[test]
    fn test_empty_comment() {
        let payload = classify("##", &HASH_PROFILE).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_right_border_removed() {
        assert_eq!(
            text_of("## Tutorial: framed ##", &HASH_PROFILE).as_deref(),
            Some("Tutorial: framed")
        );
        assert_eq!(
            text_of("-- KWords: lua   --", &DASH_PROFILE).as_deref(),
            Some("KWords: lua")
        );
    }

    #[test]
    fn test_marker_glued_to_word_is_kept() {
        assert_eq!(
            text_of("# KWords: c#, f#", &HASH_PROFILE).as_deref(),
            Some("KWords: c#, f#")
        );
    }

    #[test]
    fn test_single_line_block_comment() {
        assert_eq!(
            text_of("(* Tutorial #2: ocaml *)", &ML_PROFILE).as_deref(),
            Some("Tutorial #2: ocaml")
        );
        assert_eq!(
            text_of("(** KWords: x, y **)", &ML_PROFILE).as_deref(),
            Some("KWords: x, y")
        );
        assert_eq!(
            text_of("/* Tutorial: c */", &SLASH_PROFILE).as_deref(),
            Some("Tutorial: c")
        );
    }

    #[test]
    fn test_unterminated_block_is_not_a_comment() {
        assert_eq!(text_of("(* Tutorial: spans", &ML_PROFILE), None);
        assert_eq!(text_of("/* Tutorial: spans", &SLASH_PROFILE), None);
        assert_eq!(text_of("(* a *) let x = 1", &ML_PROFILE), None);
    }

    #[test]
    fn test_tla_line_and_block() {
        assert_eq!(text_of("\\* Tutorial: spec", &TLA_PROFILE).as_deref(), Some("Tutorial: spec"));
        assert_eq!(text_of("(* KWords: tla *)", &TLA_PROFILE).as_deref(), Some("KWords: tla"));
    }

    #[test]
    fn test_shebang_is_a_comment_line() {
        assert_eq!(text_of("#!/bin/sh", &HASH_PROFILE).as_deref(), Some("!/bin/sh"));
    }
}

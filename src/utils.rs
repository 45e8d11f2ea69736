//! Utility functions for safe string operations
//!
//! Whitespace normalization for extracted text, and UTF-8 safe truncation for
//! previews in log messages.

/// Collapse every whitespace run to a single space and trim both ends.
///
/// # Examples
/// ```
/// use tutorial_metadata::utils::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  language \t X  "), "language X");
/// ```
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Safely truncate a string at a UTF-8 char boundary.
///
/// # Examples
/// ```
/// use tutorial_metadata::utils::truncate_to_char_boundary;
///
/// assert_eq!(truncate_to_char_boundary("hello world", 5), "hello");
///
/// let s = "abc੨def"; // '੨' spans bytes 3-5
/// assert_eq!(truncate_to_char_boundary(s, 4), "abc");
/// ```
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Safely truncate a string and append an ellipsis.
pub fn truncate_with_ellipsis(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        s.to_string()
    } else {
        format!("{}...", truncate_to_char_boundary(s, max_bytes))
    }
}

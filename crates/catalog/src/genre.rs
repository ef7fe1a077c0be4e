//! Genre string handling.
//!
//! The source catalog stores genres as one comma-separated string per
//! movie ("Action, Adventure"). Every consumer must split that string the
//! same way, so this is the one canonical splitter.

/// Split a raw genre string on commas, trimming whitespace and dropping
/// empty segments.
///
/// "Action, Adventure" and "Action,Adventure" both yield
/// `["Action", "Adventure"]`.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! URL handling module
//!
//! This module provides the link-pattern compiler used for the
//! `ignore`, `nofollow` and `internlinks` filtering options.

mod matcher;

pub use matcher::LinkPattern;

/// Returns true if the URL uses the `http:` or `https:` scheme
///
/// The check is a case-insensitive prefix test on the raw string; no
/// further URL validation is done.
pub fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http:") || lower.starts_with("https:")
}

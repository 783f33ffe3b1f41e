//! Re-serialization of records.

use super::UrlParts;

/// `query + hash`.
pub fn print_query_hash(url: &UrlParts) -> String {
    format!("{}{}", url.query, url.hash)
}

/// `scheme//user@host:port/path?query#hash`.
pub fn print_schemeful(url: &UrlParts) -> String {
    format!(
        "{}//{}{}{}{}{}{}",
        url.scheme, url.user, url.host, url.port, url.path, url.query, url.hash
    )
}

/// Like [`print_schemeful`] without the scheme: `//user@host:port/path?query#hash`.
pub fn print_scheme_relative(url: &UrlParts) -> String {
    format!(
        "//{}{}{}{}{}{}",
        url.user, url.host, url.port, url.path, url.query, url.hash
    )
}

/// `/path?query#hash`.
pub fn print_absolute_path(url: &UrlParts) -> String {
    format!("{}{}{}", url.path, url.query, url.hash)
}

/// Relative form: the path without its leading `/`, then query and hash.
///
/// An empty path prints as the query and hash, or `.` if those are empty
/// too. When `input` or `base` (the strings the caller started from) begins
/// with `.`, the result is written as an explicit `./` reference unless it
/// already begins with `.`.
pub fn print_relative_path(url: &UrlParts, input: &str, base: &str) -> String {
    let path = url.path.strip_prefix('/').unwrap_or(&url.path);
    let query_hash = print_query_hash(url);
    if path.is_empty() {
        return if query_hash.is_empty() {
            ".".to_string()
        } else {
            query_hash
        };
    }
    if (input.starts_with('.') || base.starts_with('.')) && !path.starts_with('.') {
        return format!("./{path}{query_hash}");
    }
    format!("{path}{query_hash}")
}

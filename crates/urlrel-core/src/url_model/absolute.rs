//! Generic `scheme://user@host:port/path?query#hash` decomposition.
//!
//! The grammar is a prefix match: each group is optional and tried in order,
//! and anything left over once no group applies is dropped.

use super::{UrlParts, UrlShape};

/// Splits off a leading `scheme:` followed by `//`.
///
/// Returns the scheme (with its `:`) and the text after the `//`. A scheme is
/// one or more ASCII letters, digits, `+`, `.` or `-`.
pub(super) fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    let name = &input[..colon];
    if name.is_empty() || !name.bytes().all(is_scheme_byte) {
        return None;
    }
    let rest = input[colon + 1..].strip_prefix("//")?;
    Some((&input[..=colon], rest))
}

fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-')
}

/// Decomposes the text following `scheme://` into an `Absolute` record.
pub(super) fn parse_absolute_url(scheme: &str, rest: &str) -> UrlParts {
    let user_end = rest
        .find(|c| matches!(c, '@' | '/' | '#' | '?'))
        .filter(|&i| rest.as_bytes()[i] == b'@');
    let (user, rest) = match user_end {
        Some(i) => rest.split_at(i + 1),
        None => ("", rest),
    };

    let host_end = rest
        .find(|c| matches!(c, ':' | '/' | '#' | '?'))
        .unwrap_or(rest.len());
    let (host, rest) = rest.split_at(host_end);

    let port_len = match rest.strip_prefix(':') {
        Some(after) => {
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                digits + 1
            } else {
                0
            }
        }
        None => 0,
    };
    let (port, rest) = rest.split_at(port_len);

    let (path, query, hash) = split_path_query_hash(rest);
    let path = if path.is_empty() { "/" } else { path };
    UrlParts {
        scheme: scheme.to_string(),
        user: user.to_string(),
        host: host.to_string(),
        port: port.to_string(),
        path: path.to_string(),
        query: query.to_string(),
        hash: hash.to_string(),
        shape: UrlShape::Absolute,
    }
}

/// Splits `/path?query#hash`. The path must start with `/` to be taken; each
/// piece is empty when absent.
pub(super) fn split_path_query_hash(rest: &str) -> (&str, &str, &str) {
    let path_len = if rest.starts_with('/') {
        rest.find(|c| matches!(c, '?' | '#')).unwrap_or(rest.len())
    } else {
        0
    };
    let (path, rest) = rest.split_at(path_len);
    let (query, hash) = split_query_hash(rest);
    (path, query, hash)
}

/// Splits `?query#hash` at the start of `rest`.
pub(super) fn split_query_hash(rest: &str) -> (&str, &str) {
    let query_len = if rest.starts_with('?') {
        rest.find('#').unwrap_or(rest.len())
    } else {
        0
    };
    let (query, rest) = rest.split_at(query_len);
    let hash = if rest.starts_with('#') { rest } else { "" };
    (query, hash)
}

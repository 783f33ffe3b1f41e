//! `file:` URI decomposition.
//!
//! `file:` URIs may omit the `//` authority marker entirely, may carry an
//! empty host (`file:///x`), and may put a Windows drive letter where a host
//! would be (`file://C:/x`). A drive letter is never taken as a host; it stays
//! in the path.

use super::absolute::split_query_hash;
use super::{UrlParts, UrlShape};

pub(super) const FILE_SCHEME: &str = "file:";

/// Decomposes the text following `file:` into an `Absolute` record.
pub(super) fn parse_file_url(rest: &str) -> UrlParts {
    let (host, rest) = match rest.strip_prefix("//") {
        Some(authority) if !starts_with_drive_letter(authority) => {
            let end = authority
                .find(|c| matches!(c, '/' | '#' | '?'))
                .unwrap_or(authority.len());
            authority.split_at(end)
        }
        Some(authority) => ("", authority),
        None => ("", rest),
    };

    let path_end = rest.find(|c| matches!(c, '?' | '#')).unwrap_or(rest.len());
    let (path, rest) = rest.split_at(path_end);
    let (query, hash) = split_query_hash(rest);

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    UrlParts {
        scheme: FILE_SCHEME.to_string(),
        user: String::new(),
        host: host.to_string(),
        port: String::new(),
        path,
        query: query.to_string(),
        hash: hash.to_string(),
        shape: UrlShape::Absolute,
    }
}

fn starts_with_drive_letter(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

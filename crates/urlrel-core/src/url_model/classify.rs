//! Shape classification and decomposition of arbitrary input strings.

use super::absolute::{parse_absolute_url, split_path_query_hash, split_scheme};
use super::file::{parse_file_url, FILE_SCHEME};
use super::{UrlParts, UrlShape};

/// Classifies `input` and splits it into components.
///
/// First match wins:
///
/// 1. `//host/...` is `SchemeRelative` (parsed as if it had an `http:` scheme).
/// 2. `/...` is `AbsolutePath`.
/// 3. `file:...` is `Absolute`, via the `file:` grammar.
/// 4. `scheme://...` is `Absolute`.
/// 5. Anything else is `Empty`, `Query`, `Hash` or `RelativePath`, depending
///    on its first character.
///
/// Never fails.
pub fn classify(input: &str) -> UrlParts {
    let url = if let Some(rest) = input.strip_prefix("//") {
        let mut url = parse_absolute_url("http:", rest);
        url.scheme.clear();
        url.shape = UrlShape::SchemeRelative;
        url
    } else if input.starts_with('/') {
        from_path(input, UrlShape::AbsolutePath)
    } else if let Some(rest) = input.strip_prefix(FILE_SCHEME) {
        parse_file_url(rest)
    } else if let Some((scheme, rest)) = split_scheme(input) {
        parse_absolute_url(scheme, rest)
    } else {
        let shape = if input.is_empty() {
            UrlShape::Empty
        } else if input.starts_with('?') {
            UrlShape::Query
        } else if input.starts_with('#') {
            UrlShape::Hash
        } else {
            UrlShape::RelativePath
        };
        from_path(&format!("/{input}"), shape)
    };

    tracing::trace!(input, shape = ?url.shape, path = %url.path, "classified");
    url
}

/// Builds an authority-less record from a string that starts with `/`.
fn from_path(rooted: &str, shape: UrlShape) -> UrlParts {
    let (path, query, hash) = split_path_query_hash(rooted);
    UrlParts {
        scheme: String::new(),
        user: String::new(),
        host: String::new(),
        port: String::new(),
        path: path.to_string(),
        query: query.to_string(),
        hash: hash.to_string(),
        shape,
    }
}

//! Resolution of a URL-like string against an optional base.

use crate::url_model::{
    classify, merge_paths, normalize_path, print_absolute_path, print_query_hash,
    print_relative_path, print_schemeful, UrlShape,
};

/// Resolves `input` against `base`, keeping the result as unqualified as the
/// two inputs allow.
///
/// A relative input against a relative base stays relative (`"foo"` against
/// `"dir/bar"` is `"dir/foo"`); against an absolute base it becomes absolute.
/// An empty `base` is the same as none.
///
/// # Examples
///
/// - `resolve("../foo", Some("https://example.com/dir/file"))` → `"https://example.com/foo"`
/// - `resolve("?q", Some("/a/b#h"))` → `"/a/b?q"`
/// - `resolve("foo/../..", None)` → `".."`
pub fn resolve(input: &str, base: Option<&str>) -> String {
    let base = base.filter(|b| !b.is_empty());
    if input.is_empty() && base.is_none() {
        return String::new();
    }

    let mut url = classify(input);
    let mut shape = url.shape;

    if let Some(base) = base {
        if shape != UrlShape::Absolute {
            let base_url = classify(base);
            // Each shape inherits whatever it is too unqualified to carry.
            if shape <= UrlShape::Empty {
                url.hash = base_url.hash.clone();
            }
            if shape <= UrlShape::Hash {
                url.query = base_url.query.clone();
            }
            if shape <= UrlShape::RelativePath {
                merge_paths(&mut url, &base_url);
            }
            if shape <= UrlShape::AbsolutePath {
                url.user = base_url.user.clone();
                url.host = base_url.host.clone();
                url.port = base_url.port.clone();
            }
            url.scheme = base_url.scheme.clone();
            shape = shape.max(base_url.shape);
        }
    }

    normalize_path(&mut url, shape);

    match shape {
        UrlShape::Empty | UrlShape::Hash | UrlShape::Query => print_query_hash(&url),
        UrlShape::RelativePath => print_relative_path(&url, input, base.unwrap_or("")),
        UrlShape::AbsolutePath => print_absolute_path(&url),
        UrlShape::SchemeRelative | UrlShape::Absolute => print_schemeful(&url),
    }
}

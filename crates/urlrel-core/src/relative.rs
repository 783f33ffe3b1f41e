//! Minimal relative reference from one URL-like string to another.

use crate::error::RelativeError;
use crate::url_model::{
    classify, normalize_path, print_absolute_path, print_relative_path, print_scheme_relative,
    print_schemeful, strip_path_filename, UrlShape,
};

/// Computes the shortest string that, resolved against `from`, refers to `to`.
///
/// `from` is treated as a base: its filename is ignored, so `a/b.js` and
/// `a/` give the same result. When no relative form exists (different
/// scheme, different authority, or one side rooted and the other not), `to`
/// comes back in the most qualified form needed.
///
/// # Errors
///
/// [`RelativeError::UnresolvableParentReference`] when `from` still has an
/// excess `..` at the point where it diverges from `to`.
///
/// # Examples
///
/// - `relative("deep/dir/", "deep/dir/../bar/main.js.map")` → `"../bar/main.js.map"`
/// - `relative("/root/dir/", "https://input.com/nested/file.js")` → `"https://input.com/nested/file.js"`
pub fn relative(from: &str, to: &str) -> Result<String, RelativeError> {
    let mut to_url = classify(to);
    let shape = to_url.shape;
    normalize_path(&mut to_url, shape);

    let mut from_url = classify(from);

    if !to_url.scheme.is_empty() && to_url.scheme != from_url.scheme {
        tracing::debug!(from, to, "scheme differs, keeping absolute url");
        return Ok(print_schemeful(&to_url));
    }

    // A `to` that carries an authority, even an empty one (`file:///x`), must match `from`'s.
    if to_url.shape >= UrlShape::SchemeRelative && to_url.authority() != from_url.authority() {
        tracing::debug!(from, to, "authority differs, keeping scheme-relative url");
        return Ok(print_scheme_relative(&to_url));
    }

    if shape.is_relative() != from_url.shape.is_relative() {
        tracing::debug!(from, to, "rootedness differs, no common directory");
        return Ok(if shape.is_relative() {
            print_relative_path(&to_url, to, from)
        } else {
            print_absolute_path(&to_url)
        });
    }

    normalize_path(&mut from_url, shape);

    let mut from_dirs: Vec<&str> = strip_path_filename(&from_url.path).split('/').collect();
    if from_dirs.last() == Some(&"") {
        from_dirs.pop();
    }
    let to_pieces: Vec<&str> = to_url.path.split('/').collect();

    // `to`'s last piece is its filename and is never part of the shared
    // prefix, unless it is `..`, which names a directory.
    let to_dirs = if to_url.path.ends_with("/..") {
        to_pieces.len()
    } else {
        to_pieces.len() - 1
    };
    let limit = from_dirs.len().min(to_dirs);
    let common = from_dirs
        .iter()
        .zip(&to_pieces)
        .take(limit)
        .take_while(|(a, b)| a == b)
        .count();

    let remaining = &from_dirs[common..];
    if remaining.first() == Some(&"..") {
        tracing::debug!(from, to, "unresolved parent directory in base");
        return Err(RelativeError::UnresolvableParentReference {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let mut path = "/..".repeat(remaining.len());
    path.push('/');
    path.push_str(&to_pieces[common..].join("/"));
    to_url.path = path;

    Ok(print_relative_path(&to_url, to, from))
}

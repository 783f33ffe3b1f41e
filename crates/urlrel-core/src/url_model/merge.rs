//! Joining a relative record onto a base record's directory.

use super::normalize::normalized;
use super::UrlParts;

/// Rewrites `url.path` to sit under `base`'s directory.
///
/// The base path is normalized under the base's own shape first. A `url`
/// with no path of its own (`/`, e.g. a bare query or hash) takes the whole
/// base path; otherwise the base's filename is dropped and `url.path` is
/// appended. The result is not normalized.
pub fn merge_paths(url: &mut UrlParts, base: &UrlParts) {
    let base_path = normalized(&base.path, base.shape);
    if url.path == "/" {
        url.path = base_path;
    } else {
        url.path = format!("{}{}", strip_path_filename(&base_path), url.path);
    }
}

/// Everything up to and including the last `/`.
///
/// A path ending in `/..` names a directory and is returned whole.
pub fn strip_path_filename(path: &str) -> &str {
    if path.ends_with("/..") {
        return path;
    }
    match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "",
    }
}

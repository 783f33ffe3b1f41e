//! Dot-segment removal.

use super::{UrlParts, UrlShape};

/// Removes `.`, `..` and empty segments from `url.path`.
///
/// `shape` picks the policy for a `..` with nothing left to pop: relative
/// shapes keep it (it names a directory above the starting point), rooted
/// shapes drop it (nothing exists above the root). A trailing `/` survives,
/// and popping a directory with `..` leaves one behind.
pub fn normalize_path(url: &mut UrlParts, shape: UrlShape) {
    url.path = normalized(&url.path, shape);
}

pub(super) fn normalized(path: &str, shape: UrlShape) -> String {
    let keep_excess_parents = shape.is_relative();

    let mut written: Vec<&str> = Vec::new();
    // Real segments in `written` that a later `..` may still pop.
    let mut positive = 0usize;
    let mut add_trailing_slash = false;

    for piece in path.split('/').skip(1) {
        if piece.is_empty() {
            add_trailing_slash = true;
            continue;
        }
        add_trailing_slash = false;

        match piece {
            "." => {}
            ".." => {
                if positive > 0 {
                    positive -= 1;
                    written.pop();
                    add_trailing_slash = true;
                } else if keep_excess_parents {
                    written.push(piece);
                }
            }
            _ => {
                written.push(piece);
                positive += 1;
            }
        }
    }

    let mut out = String::with_capacity(path.len());
    for piece in &written {
        out.push('/');
        out.push_str(piece);
    }
    // `/..` already denotes a directory.
    if out.is_empty() || (add_trailing_slash && !out.ends_with("/..")) {
        out.push('/');
    }
    tracing::trace!(from = path, to = %out, ?shape, "normalized path");
    out
}

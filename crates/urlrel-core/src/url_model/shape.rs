//! Shape tag: the seven-way classification of a URL-like string.

use std::cmp::Ordering;

/// The form of a URL-like string, from least to most qualified.
///
/// The ordering is significant. Everything up to and including
/// [`UrlShape::RelativePath`] has no root to resolve `..` against; the
/// remaining shapes are rooted. Resolution also relies on it: a record
/// inherits from its base every component its own shape ranks too low to
/// carry.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlShape {
    /// `""`
    Empty = 1,
    /// `#hash`
    Hash = 2,
    /// `?query`
    Query = 3,
    /// `foo/bar`, `./foo`, `../foo`
    RelativePath = 4,
    /// `/foo`
    AbsolutePath = 5,
    /// `//host/foo`
    SchemeRelative = 6,
    /// `scheme://host/foo`, `file:foo`
    Absolute = 7,
}

impl UrlShape {
    /// Position in the total order, `1` (`Empty`) through `7` (`Absolute`).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// True for shapes without a rooted directory context.
    pub fn is_relative(self) -> bool {
        self <= UrlShape::RelativePath
    }
}

impl Ord for UrlShape {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for UrlShape {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Error returned by [`crate::relative`].

use thiserror::Error;

/// The only failure in URL relativization. Everything else degrades to a
/// best-effort string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelativeError {
    /// `from` still holds an unresolved `..` where it diverges from `to`, so
    /// the directory it names is unknown and `to` cannot be expressed against it.
    #[error("cannot make relative path with remaining \"..\" parent directory")]
    UnresolvableParentReference { from: String, to: String },
}

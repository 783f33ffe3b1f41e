//! URL modeling: classification, decomposition, path normalization and
//! re-serialization of URL-like strings.
//!
//! Inputs are never rejected. Anything from a full `scheme://` URL down to an
//! empty string is classified into a [`UrlShape`] and split into [`UrlParts`].
//! The record's `path` always carries a leading `/`, even for relative inputs,
//! so that normalization works the same way for every shape; the relative
//! serializer strips it again.

mod absolute;
mod classify;
mod file;
mod merge;
mod normalize;
mod print;
mod shape;

pub use classify::classify;
pub use merge::{merge_paths, strip_path_filename};
pub use normalize::normalize_path;
pub use print::{
    print_absolute_path, print_query_hash, print_relative_path, print_scheme_relative,
    print_schemeful,
};
pub use shape::UrlShape;

/// A URL-like string split into its components.
///
/// Each component keeps its delimiter so that concatenating them reproduces
/// the input: `scheme` ends in `:`, `user` ends in `@`, `port` starts with
/// `:`, `query` with `?` and `hash` with `#`. Absent components are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub user: String,
    pub host: String,
    pub port: String,
    /// Never empty; starts with `/`.
    pub path: String,
    pub query: String,
    pub hash: String,
    pub shape: UrlShape,
}

impl UrlParts {
    /// Classifies and decomposes `input`. Same as [`classify`].
    pub fn parse(input: &str) -> Self {
        classify(input)
    }

    /// `user + host + port`; empty when the record has no authority.
    pub fn authority(&self) -> String {
        format!("{}{}{}", self.user, self.host, self.port)
    }

    /// Normalizes the path under the record's own shape.
    pub fn normalize(&mut self) {
        let shape = self.shape;
        normalize_path(self, shape);
    }
}

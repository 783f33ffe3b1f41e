//! Shared helpers for urlrel integration tests.

#![allow(dead_code)]

pub mod fixtures;

/// Drops a leading `./`, which only records how the inputs were written.
pub fn strip_dot_slash(s: &str) -> &str {
    s.strip_prefix("./").unwrap_or(s)
}

//! Accent stripping for folder-name derivation.
//!
//! Every name that ends up on disk goes through `remove_accents` first so
//! the naming scheme stays byte-identical across locales and filesystems.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritical marks from `text`, leaving base letters, case,
/// digits, punctuation, and whitespace untouched.
///
/// Decomposes to canonical form (NFD), drops every combining mark, and
/// keeps the remaining characters in their original order. Characters
/// without a decomposition pass through unchanged.
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

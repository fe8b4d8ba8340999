//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "author")]
/// pub struct AuthorMetadata {
///     pub email: String,
/// }
///
/// // Usage:
/// diag.error_with_hint(AuthorMetadata::FIELDS.email, "required", "set it");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        f.write_str(&paint(quoted, Style::new().bright_blue(), Stream::Stderr))
    }
}

//! Proc macros for notemeta.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! /// Author identity.
//! #[derive(Config)]
//! #[config(section = "author")]
//! pub struct AuthorMetadata {
//!     /// Display name used in bylines.
//!     #[config(inline_doc)]
//!     pub name: String,
//! }
//!
//! // Generates:
//! // - AuthorMetadata::FIELDS.name -> FieldPath("author.name")
//! // - author.template() -> TOML lines filled with the instance's values
//! // - author.template_with_header() -> same, under an [author] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML table path, required (`""` for the root table)
//!
//! Field-level:
//! - `#[config(inline_doc)]` - Render a one-line doc as a trailing comment
//! - `#[config(sub)]` - Nested table, rendered via its own template
//!
//! Any other key is a compile error.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}

//! Metadata section definitions.
//!
//! Each module corresponds to a table in `metadata.toml`:
//!
//! | Module   | TOML Section | Purpose                                   |
//! |----------|--------------|-------------------------------------------|
//! | `site`   | (root)       | Title, url, language, description         |
//! | `author` | `[author]`   | Author name, email, personal site         |

mod author;
mod site;

pub use author::AuthorMetadata;
pub use site::SiteMetadata;

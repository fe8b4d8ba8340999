//! notemeta - typed, validated site metadata for a notes site.
//!
//! One immutable [`SiteMetadata`] record per process, read by templates,
//! feed generators and page headers.
//!
//! ```ignore
//! let meta = notemeta::metadata();
//! assert_eq!(meta.title, "Jin's Notes");
//! assert_eq!(meta.author.email, "hey@linjin.me");
//! ```

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{
    AuthorMetadata, ConfigError, SiteMetadata, init_metadata, load, metadata,
};

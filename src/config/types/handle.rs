//! Process-wide site metadata.
//!
//! The record is installed at most once and then shared as `&'static`
//! by every reader. `OnceLock` orders the install before any read, so
//! readers on other threads need no further synchronization.

use crate::config::{ConfigError, SiteMetadata};
use std::sync::OnceLock;

/// Global metadata storage.
static METADATA: MetadataCell = MetadataCell::new();

/// Get the process-wide site metadata.
///
/// Falls back to [`SiteMetadata::builtin`] if nothing was installed
/// before the first read. Every call returns the same reference.
#[inline]
pub fn metadata() -> &'static SiteMetadata {
    METADATA.get()
}

/// Validate and install the process-wide site metadata.
///
/// Fails if the record is invalid or if metadata was already installed
/// (including the builtin fallback installed by an earlier [`metadata`] call).
pub fn init_metadata(meta: SiteMetadata) -> Result<&'static SiteMetadata, ConfigError> {
    METADATA.init(meta)
}

/// Check whether metadata has been installed yet.
#[inline]
pub fn is_initialized() -> bool {
    METADATA.cell.get().is_some()
}

/// Install-once slot for a [`SiteMetadata`] record.
pub struct MetadataCell {
    cell: OnceLock<SiteMetadata>,
}

impl MetadataCell {
    const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Read the installed record, installing the builtin one if empty.
    pub fn get(&'static self) -> &'static SiteMetadata {
        self.cell.get_or_init(SiteMetadata::builtin)
    }

    /// Validate `meta` and install it.
    pub fn init(&'static self, meta: SiteMetadata) -> Result<&'static SiteMetadata, ConfigError> {
        meta.validate()?;

        let mut installed = false;
        let value = self.cell.get_or_init(|| {
            installed = true;
            meta
        });

        if installed {
            Ok(value)
        } else {
            Err(ConfigError::AlreadyInitialized)
        }
    }
}

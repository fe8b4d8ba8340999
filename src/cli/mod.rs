//! Command-line interface module.

mod args;
pub mod check;
pub mod export;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, ExportArgs, ExportFormat};

use crate::config::{LoadedMetadata, MetadataSource, SiteMetadata, init_metadata};
use crate::debug;
use anyhow::{Context, Result};

/// Apply CLI overrides, then validate and install the record process-wide.
///
/// Called once per run, before any command output.
pub fn install(loaded: LoadedMetadata, site_url: Option<&str>) -> Result<&'static SiteMetadata> {
    let LoadedMetadata {
        mut metadata,
        source,
        ..
    } = loaded;

    apply_overrides(&mut metadata, site_url);
    init_metadata(metadata)
        .with_context(|| format!("invalid site metadata in {}", describe_origin(&source, site_url)))
}

/// Replace fields given on the command line. Validation happens afterwards.
pub fn apply_overrides(metadata: &mut SiteMetadata, site_url: Option<&str>) {
    if let Some(url) = site_url {
        debug!("config"; "overriding url with {}", url);
        metadata.url = url.to_string();
    }
}

/// Where the installed values came from, for error context.
fn describe_origin(source: &MetadataSource, site_url: Option<&str>) -> String {
    match site_url {
        Some(url) => format!("{source} with --site-url {url}"),
        None => source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_site_url_override_replaces_url() {
        let mut meta = SiteMetadata::builtin();
        apply_overrides(&mut meta, Some("https://staging.linjin.me/notes/"));

        assert_eq!(meta.url, "https://staging.linjin.me/notes/");
        assert_eq!(meta.base_path(), "notes");
        assert_eq!(meta.title, "Jin's Notes");
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_invalid_site_url_override_fails_validation() {
        let mut meta = SiteMetadata::builtin();
        apply_overrides(&mut meta, Some("staging.linjin.me"));

        let Err(ConfigError::Diagnostics(diag)) = meta.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_for(SiteMetadata::FIELDS.url));
    }

    #[test]
    fn test_no_override_keeps_record() {
        let mut meta = SiteMetadata::builtin();
        apply_overrides(&mut meta, None);
        assert_eq!(meta, SiteMetadata::builtin());
    }

    #[test]
    fn test_origin_names_override() {
        assert_eq!(describe_origin(&MetadataSource::Builtin, None), "builtin");
        assert_eq!(
            describe_origin(&MetadataSource::Builtin, Some("ftp://x")),
            "builtin with --site-url ftp://x"
        );
    }
}

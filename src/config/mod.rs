//! Site metadata definition and loading.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Metadata tables
//! │   ├── site       # root table (title, url, language, description)
//! │   └── author     # [author]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Process-wide metadata handle
//! ├── builtin.rs     # Compiled-in metadata literal
//! ├── check.rs       # Field validation rules
//! ├── util.rs        # URL and path helpers
//! └── mod.rs         # Loading (this file)
//! ```
//!
//! # Resolution
//!
//! | `--config`          | File found | Result                        |
//! |---------------------|------------|-------------------------------|
//! | omitted             | yes        | parsed file                   |
//! | omitted             | no         | builtin literal               |
//! | given               | yes        | parsed file                   |
//! | given               | no         | `ConfigError::Io` (not found) |

pub mod builtin;
pub mod check;
pub mod section;
pub mod types;
mod util;

pub use section::{AuthorMetadata, SiteMetadata};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, init_metadata, is_initialized,
    metadata,
};
pub use util::{expand_path, extract_url_path, find_config_file_from};

use crate::{debug, log};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// Default metadata filename, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "metadata.toml";

// ============================================================================
// loading
// ============================================================================

/// Where the active record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// Parsed from a TOML file.
    File(PathBuf),
    /// The compiled-in literal.
    Builtin,
}

impl fmt::Display for MetadataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => f.write_str("builtin"),
        }
    }
}

/// A record read from its source, not yet validated or installed.
#[derive(Debug, Clone)]
pub struct LoadedMetadata {
    pub metadata: SiteMetadata,
    pub source: MetadataSource,
    /// Dotted paths of keys the record does not define.
    pub unknown_fields: Vec<String>,
}

/// Resolve and read the metadata record, searching from the working directory.
///
/// `config` is the `--config` value; `None` means the default name with
/// builtin fallback. See the module docs for the resolution table.
pub fn load(config: Option<&Path>) -> Result<LoadedMetadata, ConfigError> {
    let cwd = std::env::current_dir().map_err(|err| ConfigError::Io(PathBuf::from("."), err))?;
    load_from(&cwd, config)
}

/// [`load`] with relative names searched upward from `start`.
pub fn load_from(start: &Path, config: Option<&Path>) -> Result<LoadedMetadata, ConfigError> {
    let explicit = config.is_some();
    let name = expand_path(config.unwrap_or(Path::new(DEFAULT_CONFIG_NAME)));

    let Some(path) = find_config_file_from(start, &name) else {
        if explicit {
            return Err(ConfigError::Io(
                name,
                io::Error::new(io::ErrorKind::NotFound, "metadata file not found"),
            ));
        }
        debug!("config"; "no {} found, using builtin metadata", DEFAULT_CONFIG_NAME);
        return Ok(LoadedMetadata {
            metadata: SiteMetadata::builtin(),
            source: MetadataSource::Builtin,
            unknown_fields: Vec::new(),
        });
    };

    debug!("config"; "loading metadata from {}", path.display());
    let (metadata, unknown_fields) = SiteMetadata::from_path(&path)?;
    if !unknown_fields.is_empty() {
        print_unknown_fields_warning(&unknown_fields, &path);
    }

    Ok(LoadedMetadata {
        metadata,
        source: MetadataSource::File(path),
        unknown_fields,
    })
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

impl SiteMetadata {
    /// Load a record from a TOML file with unknown field detection.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let meta = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((meta, ignored))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse the builtin record with `overrides` merged over it.
///
/// `overrides` is TOML using the file layout; `[author]` keys merge into
/// the builtin author. Panics if the result has unknown fields (to catch
/// typos in tests).
#[cfg(test)]
pub fn test_parse_metadata(overrides: &str) -> SiteMetadata {
    let mut base: toml::Table = toml::from_str(&SiteMetadata::builtin().to_toml().unwrap()).unwrap();
    let overrides: toml::Table = toml::from_str(overrides).unwrap();

    for (key, value) in overrides {
        if let (Some(toml::Value::Table(table)), toml::Value::Table(extra)) =
            (base.get_mut(&key), &value)
        {
            table.extend(extra.clone());
            continue;
        }
        base.insert(key, value);
    }

    let (parsed, ignored) = SiteMetadata::parse_with_ignored(&base.to_string()).unwrap();
    assert!(
        ignored.is_empty(),
        "test metadata has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
title = "Field Notes"
url = "https://example.com/notes"
language = "en-GB"
description = "Working notes."

[author]
name = "Alice"
email = "alice@example.com"
url = "https://alice.dev/"
"#;

    #[test]
    fn test_parse_full_file() {
        let (meta, ignored) = SiteMetadata::parse_with_ignored(FULL).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(meta.title, "Field Notes");
        assert_eq!(meta.url, "https://example.com/notes");
        assert_eq!(meta.language, "en-GB");
        assert_eq!(meta.description, "Working notes.");
        assert_eq!(meta.author.name, "Alice");
        assert_eq!(meta.author.email, "alice@example.com");
        assert_eq!(meta.author.url, "https://alice.dev/");
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = SiteMetadata::parse_with_ignored("[author\nname = \"Jin\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = SiteMetadata::parse_with_ignored("title = 42").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_fields_are_reported_not_rejected() {
        let (meta, _) = SiteMetadata::parse_with_ignored("title = \"Only Title\"").unwrap();
        assert_eq!(meta.title, "Only Title");
        assert!(meta.author.email.is_empty());

        let Err(ConfigError::Diagnostics(diag)) = meta.validate() else {
            panic!("expected diagnostics");
        };
        assert!(!diag.has_error_for(SiteMetadata::FIELDS.title));
        assert!(diag.has_error_for(SiteMetadata::FIELDS.url));
        assert!(diag.has_error_for(AuthorMetadata::FIELDS.email));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = format!("{FULL}\nphone = \"555\"\n[social]\nmastodon = \"@jin\"");
        let (meta, ignored) = SiteMetadata::parse_with_ignored(&content).unwrap();

        assert_eq!(meta.title, "Field Notes");
        assert!(ignored.iter().any(|f| f.contains("phone")));
        assert!(ignored.iter().any(|f| f.contains("social")));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, FULL).unwrap();

        let (meta, ignored) = SiteMetadata::from_path(&path).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(meta.author.name, "Alice");
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = SiteMetadata::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(p, _) if p == path));
    }

    #[test]
    fn test_load_explicit_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, FULL).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.source, MetadataSource::File(path));
        assert_eq!(loaded.metadata.title, "Field Notes");
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_load_default_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(dir.path(), None).unwrap();

        assert_eq!(loaded.source, MetadataSource::Builtin);
        assert_eq!(loaded.metadata, SiteMetadata::builtin());
        assert!(loaded.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_default_found_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("_data");
        fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, FULL).unwrap();

        let loaded = load_from(&nested, None).unwrap();
        assert_eq!(loaded.source, MetadataSource::File(path));
        assert_eq!(loaded.metadata.author.name, "Alice");
    }

    #[test]
    fn test_load_explicit_relative_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(dir.path(), Some(Path::new("notemeta-absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(MetadataSource::Builtin.to_string(), "builtin");
        assert_eq!(
            MetadataSource::File(PathBuf::from("/site/metadata.toml")).to_string(),
            "/site/metadata.toml"
        );
    }

    #[test]
    fn test_helper_merges_author() {
        let meta = test_parse_metadata("[author]\nname = \"Alice\"");
        assert_eq!(meta.author.name, "Alice");
        assert_eq!(meta.author.email, "hey@linjin.me");
        assert_eq!(meta.title, "Jin's Notes");
    }
}

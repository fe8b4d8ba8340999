//! Root metadata record.
//!
//! Contains the site identity read by templates, feed generators and
//! page headers. The author lives in its own `[author]` table.
//!
//! # Example
//!
//! ```toml
//! title = "Jin's Notes"
//! url = "https://notes.linjin.me"
//! language = "en"
//! description = "Notes on how systems get adopted."
//!
//! [author]
//! name = "Jin"
//! email = "hey@linjin.me"
//! url = "https://linjin.me/"
//! ```

use super::AuthorMetadata;
use crate::config::{ConfigDiagnostics, ConfigError, builtin, check, util::extract_url_path};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata.
///
/// Every field is required. Values are kept exactly as written: nothing
/// is trimmed or normalized, including URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteMetadata {
    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Canonical site root, path used as prefix (e.g., "https://example.com/blog").
    #[config(inline_doc)]
    pub url: String,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(inline_doc)]
    pub language: String,

    /// Site description.
    /// Used for meta description tags and feed channel descriptions.
    pub description: String,

    #[config(sub)]
    pub author: AuthorMetadata,
}

impl SiteMetadata {
    /// The compiled-in record.
    pub fn builtin() -> Self {
        Self {
            title: builtin::TITLE.into(),
            url: builtin::URL.into(),
            language: builtin::LANGUAGE.into(),
            description: builtin::DESCRIPTION.into(),
            author: AuthorMetadata::builtin(),
        }
    }

    /// Validate every field, collecting all failures.
    pub fn check(&self, diag: &mut ConfigDiagnostics) {
        check::require(&self.title, Self::FIELDS.title, diag);
        check::check_http_url(&self.url, Self::FIELDS.url, diag);
        check::check_language(&self.language, Self::FIELDS.language, diag);
        check::require(&self.description, Self::FIELDS.description, diag);
        self.author.check(diag);
    }

    /// Validate the record, failing with all collected diagnostics.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.check(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Parsed site URL. Only meaningful on a validated record.
    pub fn site_url(&self) -> Option<url::Url> {
        url::Url::parse(&self.url).ok()
    }

    /// URL path of the site root without surrounding slashes.
    ///
    /// `https://example.github.io/notes/` gives `notes`; a root URL gives "".
    pub fn base_path(&self) -> String {
        extract_url_path(&self.url).unwrap_or_default()
    }

    /// Serialize as JSON, keeping field order.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Serialize as plain TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Commented TOML with this record's values, as written by `init`.
    pub fn to_template(&self) -> String {
        let mut out = self.template_with_header();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_metadata;

    #[test]
    fn test_builtin_values_exact() {
        let meta = SiteMetadata::builtin();
        assert_eq!(meta.title, "Jin's Notes");
        assert_eq!(meta.url, "https://notes.linjin.me");
        assert_eq!(meta.language, "en");
        assert_eq!(
            meta.description,
            "I'm Jin. I build at the gap between how systems should work and how people \
             actually adopt them - where desirable, feasible, and viable converge into sticky \
             innovation that delivers useful outcomes."
        );
        assert_eq!(meta.author.name, "Jin");
        assert_eq!(meta.author.email, "hey@linjin.me");
        assert_eq!(meta.author.url, "https://linjin.me/");
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(SiteMetadata::builtin().validate().is_ok());
    }

    #[test]
    fn test_default_is_invalid() {
        // Missing everything: one `required` error per field
        let err = SiteMetadata::default().validate().unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 7);
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(SiteMetadata::FIELDS.title.as_str(), "title");
        assert_eq!(SiteMetadata::FIELDS.url.as_str(), "url");
        assert_eq!(SiteMetadata::FIELDS.author.as_str(), "author");
        assert_eq!(SiteMetadata::TEMPLATE_SECTION, "");
    }

    #[test]
    fn test_values_not_trimmed() {
        let meta = test_parse_metadata("title = \"  Spaced Title  \"\nurl = \"https://notes.linjin.me/\"");
        assert_eq!(meta.title, "  Spaced Title  ");
        assert_eq!(meta.url, "https://notes.linjin.me/");
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_collected() {
        let meta = test_parse_metadata(
            "url = \"notes.linjin.me\"\nlanguage = \"en_US\"\n[author]\nemail = \"hey\"",
        );
        let Err(ConfigError::Diagnostics(diag)) = meta.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
        assert!(diag.has_error_for(SiteMetadata::FIELDS.url));
        assert!(diag.has_error_for(SiteMetadata::FIELDS.language));
        assert!(diag.has_error_for(AuthorMetadata::FIELDS.email));
    }

    #[test]
    fn test_base_path() {
        assert_eq!(SiteMetadata::builtin().base_path(), "");

        let meta = test_parse_metadata("url = \"https://example.github.io/notes/\"");
        assert_eq!(meta.base_path(), "notes");
    }

    #[test]
    fn test_site_url() {
        let parsed = SiteMetadata::builtin().site_url().unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host_str(), Some("notes.linjin.me"));
    }

    #[test]
    fn test_json_shape() {
        let json = SiteMetadata::builtin().to_json(false).unwrap();
        assert!(json.starts_with(r#"{"title":"Jin's Notes","url":"https://notes.linjin.me","language":"en","description":"#));
        assert!(json.ends_with(
            r#""author":{"name":"Jin","email":"hey@linjin.me","url":"https://linjin.me/"}}"#
        ));
    }

    #[test]
    fn test_toml_reparses_equal() {
        let meta = SiteMetadata::builtin();
        let parsed: SiteMetadata = toml::from_str(&meta.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, meta);
    }

    #[test]
    fn test_template_carries_values_and_docs() {
        let template = SiteMetadata::builtin().to_template();
        assert!(template.contains("title = \"Jin's Notes\"  # Site title."));
        assert!(template.contains("# Site description.\n"));
        assert!(template.contains("\n# Author identity, used for bylines and feed entries.\n[author]\n"));
        assert_eq!(template.matches("# Author identity").count(), 1);
        assert!(template.contains("email = \"hey@linjin.me\"  # Contact email address."));

        let parsed: SiteMetadata = toml::from_str(&template).unwrap();
        assert_eq!(parsed, SiteMetadata::builtin());
    }
}

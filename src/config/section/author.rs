//! `[author]` metadata.

use crate::config::{ConfigDiagnostics, builtin, check};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Author identity, used for bylines and feed entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "author")]
pub struct AuthorMetadata {
    /// Author name.
    #[config(inline_doc)]
    pub name: String,

    /// Contact email address.
    #[config(inline_doc)]
    pub email: String,

    /// Author's personal site.
    #[config(inline_doc)]
    pub url: String,
}

impl AuthorMetadata {
    /// The compiled-in author record.
    pub fn builtin() -> Self {
        Self {
            name: builtin::AUTHOR_NAME.into(),
            email: builtin::AUTHOR_EMAIL.into(),
            url: builtin::AUTHOR_URL.into(),
        }
    }

    /// Validate author fields.
    ///
    /// # Checks
    /// - `name` is set
    /// - `email` has a `local@domain` shape
    /// - `url` is an absolute http(s) URL
    pub fn check(&self, diag: &mut ConfigDiagnostics) {
        check::require(&self.name, Self::FIELDS.name, diag);
        check::check_email(&self.email, Self::FIELDS.email, diag);
        check::check_http_url(&self.url, Self::FIELDS.url, diag);
    }

    /// Parsed author URL. Only meaningful on a validated record.
    pub fn site_url(&self) -> Option<url::Url> {
        url::Url::parse(&self.url).ok()
    }

    /// Author in RSS `managingEditor`/`author` form: `email (Name)`.
    pub fn rss_author(&self) -> String {
        format!("{} ({})", self.email, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_metadata;

    #[test]
    fn test_builtin_author() {
        let author = AuthorMetadata::builtin();
        assert_eq!(author.name, "Jin");
        assert_eq!(author.email, "hey@linjin.me");
        assert_eq!(author.url, "https://linjin.me/");

        let mut diag = ConfigDiagnostics::new();
        author.check(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(AuthorMetadata::FIELDS.name.as_str(), "author.name");
        assert_eq!(AuthorMetadata::FIELDS.email.as_str(), "author.email");
        assert_eq!(AuthorMetadata::FIELDS.url.as_str(), "author.url");
    }

    #[test]
    fn test_custom_author() {
        let meta = test_parse_metadata(
            "[author]\nname = \"Alice\"\nemail = \"alice@example.com\"\nurl = \"https://alice.dev\"",
        );
        assert_eq!(meta.author.name, "Alice");
        assert_eq!(meta.author.email, "alice@example.com");
        assert_eq!(meta.author.url, "https://alice.dev");
    }

    #[test]
    fn test_check_reports_each_field() {
        let author = AuthorMetadata {
            name: String::new(),
            email: "not-an-email".into(),
            url: "linjin.me".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        author.check(&mut diag);

        assert_eq!(diag.len(), 3);
        assert!(diag.has_error_for(AuthorMetadata::FIELDS.name));
        assert!(diag.has_error_for(AuthorMetadata::FIELDS.email));
        assert!(diag.has_error_for(AuthorMetadata::FIELDS.url));
    }

    #[test]
    fn test_site_url_keeps_raw_value() {
        let author = AuthorMetadata::builtin();
        let parsed = author.site_url().unwrap();
        assert_eq!(parsed.host_str(), Some("linjin.me"));
        // The stored string is never rewritten by parsing
        assert_eq!(author.url, "https://linjin.me/");
    }

    #[test]
    fn test_rss_author() {
        assert_eq!(AuthorMetadata::builtin().rss_author(), "hey@linjin.me (Jin)");
    }
}

//! Field-level validation rules shared by metadata sections.
//!
//! Each check reports into [`ConfigDiagnostics`] instead of returning early,
//! so one pass surfaces every problem in the record.

use super::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use std::sync::LazyLock;

/// Basic `local@domain.tld` shape, no whitespace anywhere.
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@ \t\r\n]+@[^@ \t\r\n]+\.[^@ \t\r\n]+$").unwrap());

/// BCP 47-style tag: primary subtag plus optional `-subtag`s.
static RE_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").unwrap());

/// Report an error if `value` is empty or whitespace-only.
///
/// Returns `true` if the value is present, so callers can skip
/// format checks that would only repeat the same complaint.
pub fn require(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) -> bool {
    if value.trim().is_empty() {
        diag.error_with_hint(
            field,
            "required field is missing or empty",
            format!("set {field} in the metadata file"),
        );
        return false;
    }
    true
}

/// Absolute http(s) URL with a host.
pub fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !require(value, field, diag) {
        return;
    }

    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

pub fn check_email(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if require(value, field, diag) && !RE_EMAIL.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a valid email address"),
            "use format like name@example.com",
        );
    }
}

pub fn check_language(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if require(value, field, diag) && !RE_LANGUAGE.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a valid language tag"),
            "use a BCP 47 tag like \"en\", \"en-US\" or \"zh-Hans\"",
        );
    }
}

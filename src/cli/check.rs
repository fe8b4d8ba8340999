//! `check` command: validate and report.

use crate::config::{ConfigDiagnostics, LoadedMetadata};
use crate::log;

/// Validate `loaded`, printing either a success line or every diagnostic.
///
/// Returns `true` if the record is valid.
pub fn check_metadata(loaded: &LoadedMetadata) -> bool {
    let mut diag = ConfigDiagnostics::new();
    loaded.metadata.check(&mut diag);

    if diag.has_errors() {
        eprintln!("{diag}");
        log!("error"; "{} has {} invalid field(s)", loaded.source, diag.len());
        return false;
    }

    if loaded.unknown_fields.is_empty() {
        log!("check"; "metadata ok ({})", loaded.source);
    } else {
        log!("check"; "metadata ok ({}), {} unknown field(s) ignored",
            loaded.source, loaded.unknown_fields.len());
    }
    true
}

//! `export` command: write the record for an external site generator.

use super::{ExportArgs, ExportFormat};
use crate::config::{SiteMetadata, expand_path};
use crate::log;
use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

/// Serialize `meta` in the requested format, newline-terminated.
pub fn render(meta: &SiteMetadata, format: ExportFormat, pretty: bool) -> Result<String> {
    let mut out = match format {
        ExportFormat::Json => meta.to_json(pretty).context("failed to serialize JSON")?,
        ExportFormat::Toml => meta.to_toml().context("failed to serialize TOML")?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

pub fn export_metadata(meta: &SiteMetadata, args: &ExportArgs) -> Result<()> {
    let content = render(meta, args.format, args.pretty)?;

    match &args.output {
        Some(output) => {
            let path = expand_path(output);
            write_file(&path, &content)?;
            log!("export"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

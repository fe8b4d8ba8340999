//! `init` command: write a commented metadata file.

use crate::config::{DEFAULT_CONFIG_NAME, SiteMetadata, expand_path};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Generate metadata.toml content with comments.
pub fn generate_metadata_template() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# notemeta metadata file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&SiteMetadata::builtin().to_template());
    out
}

/// Target path for `init`: `--config` if given, else `metadata.toml` in cwd.
pub fn target_path(config: Option<&Path>) -> PathBuf {
    expand_path(config.unwrap_or(Path::new(DEFAULT_CONFIG_NAME)))
}

/// Write the template to `path`, refusing to overwrite unless `force`.
pub fn write_metadata_file(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::write(path, generate_metadata_template())
        .with_context(|| format!("Failed to write metadata file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

pub fn init_metadata_file(config: Option<&Path>, dry: bool, force: bool) -> Result<()> {
    if dry {
        print!("{}", generate_metadata_template());
        return Ok(());
    }
    write_metadata_file(&target_path(config), force)
}

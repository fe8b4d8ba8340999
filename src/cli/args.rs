//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Typed, validated site metadata for a notes site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Metadata file path (default: metadata.toml, searched upward; builtin record if absent)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the active metadata record
    #[command(visible_alias = "s")]
    Show,

    /// Validate the metadata record and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Write the validated record for a site generator to consume
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },

    /// Write a commented metadata.toml filled with the builtin record
    #[command(visible_alias = "i")]
    Init {
        /// Print the file to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override the site URL.
    ///
    /// Useful for CI deployments where the production URL differs from the
    /// one in metadata.toml. The override is validated like the file value.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Serialization format for `export`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

impl Cli {
    /// CLI site URL override, if the command takes one.
    pub fn site_url(&self) -> Option<&str> {
        match &self.command {
            Commands::Export { args } => args.site_url.as_deref(),
            _ => None,
        }
    }
}

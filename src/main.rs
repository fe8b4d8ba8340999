//! notemeta - site metadata provider CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use notemeta::cli::{self, Cli, Commands};
use notemeta::{config, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Commands::Init { dry, force } = cli.command {
        return cli::init::init_metadata_file(cli.config.as_deref(), dry, force);
    }

    let loaded = config::load(cli.config.as_deref())?;
    let source = loaded.source.clone();

    // `check` reports every diagnostic itself instead of failing through install
    if matches!(cli.command, Commands::Check) && !cli::check::check_metadata(&loaded) {
        std::process::exit(1);
    }

    let meta = cli::install(loaded, cli.site_url())?;

    match &cli.command {
        Commands::Show => cli::show::show_metadata(meta, &source),
        Commands::Export { args } => cli::export::export_metadata(meta, args)?,
        Commands::Check => {}
        Commands::Init { .. } => unreachable!("handled above"),
    }
    Ok(())
}

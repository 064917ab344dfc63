//! stock-vitepress - deployment-aware site configuration for the Stock
//! VitePress docs site.

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteManifest;

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let loaded = SiteManifest::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(loaded.as_ref(), args),
        Commands::Check => cli::check::run_check(&loaded.unwrap_or_default()),
        Commands::Env { mode } => cli::env::run_env(&loaded.unwrap_or_default(), mode),
    }
}

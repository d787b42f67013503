//! Folio - scroll-spy, head metadata sync and contact relay for portfolio sites.

#![allow(dead_code)]

mod cli;
mod config;
mod contact;
mod core;
mod logger;
mod project;
mod seo;
mod spy;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry_run: true, .. } => {
            print!("{}", cli::init::generate_config_template());
            Ok(())
        }
        Commands::Init { .. } => {
            let file_name = config
                .config_path
                .file_name()
                .map_or_else(|| Path::new("folio.toml"), Path::new);
            cli::init::write_config(config.get_root(), file_name)
        }
        Commands::Head { args } => {
            print!("{}", cli::head::render(&config, args)?);
            Ok(())
        }
        Commands::Spy { args } => {
            let page = cli::spy::load_page(&args.layout)?;
            print!("{}", cli::spy::replay(&config, page, args)?);
            Ok(())
        }
        Commands::Projects { filter, json } => {
            print!("{}", cli::projects::list(&config, *filter, *json)?);
            Ok(())
        }
        Commands::Serve { .. } => {
            cli::serve::serve(Arc::new(config)).context("Server stopped with an error")
        }
    }
}

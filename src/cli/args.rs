//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::project::Filter;

/// Folio portfolio toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented folio.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the document head for a section
    #[command(visible_alias = "h")]
    Head {
        #[command(flatten)]
        args: HeadArgs,
    },

    /// Replay scroll offsets against a page layout
    Spy {
        #[command(flatten)]
        args: SpyArgs,
    },

    /// List the project catalog
    #[command(visible_alias = "p")]
    Projects {
        /// Only show one category (all, frontend, backend, fullstack)
        #[arg(short, long, default_value = "all")]
        filter: Filter,

        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Serve the portfolio and the contact endpoint
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Log emails instead of writing them to the outbox
        #[arg(short, long)]
        dry_run: bool,
    },
}

/// Head command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HeadArgs {
    /// Section id (defaults to the first configured section)
    pub section: Option<String>,

    /// Override the title
    #[arg(long)]
    pub title: Option<String>,

    /// Override the description
    #[arg(long)]
    pub description: Option<String>,

    /// Override the keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Override the Open Graph image
    #[arg(long)]
    pub image: Option<String>,

    /// Override the canonical URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub canonical: Option<String>,

    /// Print the merged record as JSON instead of HTML
    #[arg(short, long)]
    pub json: bool,
}

/// Spy command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SpyArgs {
    /// Layout file with viewport height and section ranges
    #[arg(short, long, default_value = "layout.toml", value_hint = clap::ValueHint::FilePath)]
    pub layout: PathBuf,

    /// Override `spy.offset`
    #[arg(short, long)]
    pub offset: Option<f64>,

    /// Override `spy.threshold`
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Print the head after every section change
    #[arg(long)]
    pub head: bool,

    /// Scroll offsets to replay, in order
    #[arg(value_name = "SCROLL_Y", allow_negative_numbers = true)]
    pub scroll: Vec<f64>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}

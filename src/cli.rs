//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Masthead shell server CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (where masthead.toml and the asset
    /// directory live)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: masthead.toml)
    #[arg(short = 'C', long, default_value = "masthead.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the site, rendering a shell document per request
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port to listen on (MASTHEAD_PORT overrides)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render the shell document for one URL path to stdout
    Render {
        /// Request path to render, e.g. /news/local/city-council-meeting
        path: String,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_render(&self) -> bool {
        matches!(self.command, Commands::Render { .. })
    }
}

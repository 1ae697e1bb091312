//! Masthead - a shell server for content sites with per-URL head metadata.

mod cli;
mod config;
mod document;
mod metadata;
mod page;
mod render;
mod serve;
mod structured;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use metadata::SiteMetadata;
use render::render_page;
use serve::serve_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(&cli)?));
    let service = SiteMetadata::new(config);

    match &cli.command {
        Commands::Serve { .. } => serve_site(&service, config),
        Commands::Render { path } => {
            let html = render_page(path, &service, config)?;
            println!("{html}");
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found.");
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

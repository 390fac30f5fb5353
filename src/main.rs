use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use jarvis_status::cli::Cli;
use jarvis_status::config::StatusConfig;
use jarvis_status::source;

fn load_config(cwd: Option<&Path>, explicit: Option<&Path>) -> StatusConfig {
    let loaded = match (explicit, cwd) {
        (Some(path), _) => StatusConfig::load_file(path).map(|c| (c, Some(path.to_path_buf()))),
        (None, Some(cwd)) => StatusConfig::load(cwd),
        (None, None) => Ok((StatusConfig::default(), None)),
    };

    match loaded {
        Ok((config, Some(path))) => {
            debug!("loaded config from {}", path.display());
            config
        }
        Ok((config, None)) => {
            debug!("no .jarvisctl/status.toml found, using defaults");
            config
        }
        Err(e) => {
            warn!("{e:#}; using defaults");
            StatusConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "jarvis_status=warn",
        1 => "jarvis_status=debug",
        _ => "jarvis_status=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().ok();
    let config = load_config(cwd.as_deref(), cli.config.as_deref());

    let listing = source::read_listing_or_empty(if cli.stdin {
        source::read_listing_from(std::io::stdin().lock())
    } else {
        source::run_listing(&config.source)
    });

    let record = jarvis_status::summarize(&listing);
    record
        .write_line(std::io::stdout().lock())
        .context("failed to emit status record")
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "jarvis-status",
    about = "Summarize jarvisctl namespaces and agents as a status-bar JSON record",
    version
)]
pub struct Cli {
    /// Verbosity level (-v, -vv); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Read settings from this file instead of searching for .jarvisctl/status.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read the listing from stdin instead of running the listing command
    #[arg(long)]
    pub stdin: bool,
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "covenant",
    version,
    about = "Load-time policy linting for Python-syntax smart contracts"
)]
pub struct Cli {
    /// Contract files or directories to lint
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Configuration file (defaults apply when absent)
    #[arg(long, env = "COVENANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Progress notes on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

use clap::Parser;
use std::path::PathBuf;

/// cssguard: strip untrusted CSS down to an allow-listed subset.
#[derive(Parser, Debug)]
#[command(name = "cssguard", version, about)]
pub struct Args {
    /// Stylesheet to sanitize. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Write the sanitized stylesheet here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Settings file path override.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write a commented default settings file to this path and exit.
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,

    /// Print the effective settings as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Log level override (e.g. `cssguard=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

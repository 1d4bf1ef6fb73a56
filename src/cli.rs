use std::path::PathBuf;

use clap::Parser;
use tracerr::{FormatterKind, TracedError, append};

/// Build a chain of traced errors from the command line and print it.
#[derive(Parser, Debug)]
#[command(name = "tracerr", version, about, long_about = None)]
pub struct Cli {
    /// Trace line format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatterKind>,

    /// Frames to skip when capturing call sites (overrides the config file)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Path to a tracerr.toml file (default: discovered)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log configuration changes and capture failures to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Error messages, oldest first. Each one appends a line to the chain.
    #[arg(required = true)]
    pub messages: Vec<String>,
}

/// Append one traced error per message, the first one being the root.
pub fn build_chain(messages: &[String]) -> Option<TracedError> {
    let mut chain: Option<TracedError> = None;
    for message in messages {
        chain = Some(append!(chain.take(), "{}", message));
    }
    chain
}

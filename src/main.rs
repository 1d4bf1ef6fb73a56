mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracerr::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tracerr=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => tracerr::paths::find_config_file()?,
    };
    if let Some(path) = config_path {
        let config = Config::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        config.apply();
    }

    if let Some(format) = cli.format {
        format.install();
    }
    if let Some(depth) = cli.depth {
        tracerr::set_call_depth(depth);
    }

    if let Some(err) = cli::build_chain(&cli.messages) {
        println!("{}", err);
    }

    Ok(())
}

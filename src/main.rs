use anyhow::{Context, Result};
use config::{AppConfig, Command};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};
use tracing_subscriber::EnvFilter;

mod config;
mod handlers;

fn main() -> Result<()> {
    // --- Logging setup (stderr keeps stdout machine-readable) ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // --- Parse config + command ---
    let (cfg, command) = AppConfig::from_env_and_args()?;
    tracing::debug!("Running {:?} with config: {:?}", command, cfg);

    let output = match command {
        Command::Decode { shape, input } => {
            let shape = cfg.shape(shape);
            handlers::metadata_handlers::decode(&cfg, shape, &read_input(input.as_deref())?)?
        }
        Command::Project { input } => {
            handlers::metadata_handlers::project(&cfg, &read_input(input.as_deref())?)?
        }
        Command::Split { input } => {
            handlers::metadata_handlers::split(&cfg, &read_input(input.as_deref())?)?
        }
        Command::Schema { shape } => handlers::metadata_handlers::schema(&cfg, cfg.shape(shape))?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(())
}

/// Read the whole input from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("Reading input from {}", path.display());
            fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            tracing::debug!("Reading input from stdin");
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

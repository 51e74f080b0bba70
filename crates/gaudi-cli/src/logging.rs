use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Environment variable holding filter directives, e.g. `GAUDI_LOG=gaudimm=trace`.
pub const LOG_ENV_VAR: &str = "GAUDI_LOG";

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Level filter from the verbosity flags, replaced by `GAUDI_LOG` directives when set.
pub fn build_filter(verbosity: u8, quiet: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_filter(verbosity, quiet).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Stderr logging, plus plain-text logging to `log_file` when given.
pub fn build_subscriber(
    verbosity: u8,
    quiet: bool,
    log_file: Option<PathBuf>,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(build_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer))
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    build_subscriber(verbosity, quiet, log_file)?
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!(e)))
}

use gaudimm::core::diagnostics::ValidationReport;
use gaudimm::core::io::reader::ReadError;
use gaudimm::core::io::writer::WriteError;
use gaudimm::workflows::load::LoadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{failed} of {total} input file(s) failed validation")]
    Invalid { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Diagnostics worth printing along with the error message.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            CliError::Load(e) => e.report(),
            _ => None,
        }
    }
}

use crate::core::diagnostics::ValidationReport;
use crate::core::io::builder::{BuildContext, build_document};
use crate::core::io::format::InputFormat;
use crate::core::io::raw::RawDocument;
use crate::core::io::reader::{ReadError, parse_document, read_document};
use crate::core::models::defaults::DefaultsConfig;
use crate::core::models::document::InputDocument;
use crate::validation::{ValidationOptions, validate};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

const IN_MEMORY_ORIGIN: &str = "<memory>";

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub validation: ValidationOptions,
    pub defaults: DefaultsConfig,
}

/// A document that passed validation. Warnings, if any, ride along in `report`.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub document: InputDocument,
    pub report: ValidationReport,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("Input '{origin}' is invalid ({} error(s))", .report.error_count())]
    Invalid {
        origin: String,
        report: ValidationReport,
    },
}

impl LoadError {
    /// The diagnostics behind an `Invalid` error.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            LoadError::Invalid { report, .. } => Some(report),
            LoadError::Read(_) => None,
        }
    }
}

#[instrument(skip_all, name = "load_workflow", fields(path = %path.display()))]
pub fn run(path: &Path, options: &LoadOptions) -> Result<LoadedInput, LoadError> {
    info!("Loading input file {}", path.display());
    let raw = read_document(path)?;
    from_raw(raw, Some(path), options)
}

/// Builds and validates an already parsed document.
///
/// `source` is the file the document came from; relative paths are resolved
/// against its directory, or the current directory when it is `None`.
pub fn from_raw(
    raw: RawDocument,
    source: Option<&Path>,
    options: &LoadOptions,
) -> Result<LoadedInput, LoadError> {
    let origin = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| IN_MEMORY_ORIGIN.to_string());
    let context = BuildContext {
        source: source.map(Path::to_path_buf),
        defaults: options.defaults.clone(),
    };

    debug!("Building typed document for {}", origin);
    let document = build_document(raw, &context).map_err(|report| LoadError::Invalid {
        origin: origin.clone(),
        report,
    })?;

    let report = validate(&document, &options.validation);
    if report.has_errors() {
        return Err(LoadError::Invalid { origin, report });
    }
    for warning in report.warnings() {
        debug!("{}: {}", origin, warning);
    }
    Ok(LoadedInput { document, report })
}

pub fn from_str(
    content: &str,
    format: InputFormat,
    options: &LoadOptions,
) -> Result<LoadedInput, LoadError> {
    let raw = parse_document(content, format, IN_MEMORY_ORIGIN)?;
    from_raw(raw, None, options)
}

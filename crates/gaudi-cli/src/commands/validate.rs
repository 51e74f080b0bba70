use crate::cli::{InputOverrides, ValidateArgs};
use crate::config::builder::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::BatchProgress;
use gaudimm::core::diagnostics::ValidationReport;
use gaudimm::validation::ValidationOptions;
use gaudimm::workflows::load::{LoadError, from_raw};
use rayon::prelude::*;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one input file.
#[derive(Debug)]
pub enum Verdict {
    Valid(ValidationReport),
    Invalid(ValidationReport),
    /// The file could not be read, parsed or overridden.
    Failed(String),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub verdict: Verdict,
}

impl FileOutcome {
    pub fn passed(&self, strict: bool) -> bool {
        match &self.verdict {
            Verdict::Valid(report) => !strict || report.warning_count() == 0,
            Verdict::Invalid(_) | Verdict::Failed(_) => false,
        }
    }
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let options = ValidationOptions {
        check_paths: args.check_paths,
        allow_unknown_modules: args.allow_unknown_modules,
    };
    let overrides = InputOverrides {
        set_values: args.set_values.clone(),
        ..InputOverrides::default()
    };

    info!("Validating {} input file(s)", args.inputs.len());
    let progress = BatchProgress::new(args.inputs.len());
    let outcomes: Vec<FileOutcome> = args
        .inputs
        .par_iter()
        .map(|path| {
            let outcome = check_file(path, &overrides, options);
            progress.inc();
            outcome
        })
        .collect();
    progress.finish();

    for outcome in &outcomes {
        print!("{}", render_outcome(outcome, args.strict));
    }
    let failed = outcomes.iter().filter(|o| !o.passed(args.strict)).count();
    println!("{}", render_summary(&outcomes, failed));

    if failed > 0 {
        return Err(CliError::Invalid {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

pub fn check_file(
    path: &Path,
    overrides: &InputOverrides,
    options: ValidationOptions,
) -> FileOutcome {
    debug!("Checking {:?}", path);
    let verdict = match build_config(path, overrides, options) {
        Err(e) => Verdict::Failed(e.to_string()),
        Ok(app) => match from_raw(app.raw, Some(&app.input_path), &app.load_options) {
            Ok(loaded) => Verdict::Valid(loaded.report),
            Err(LoadError::Invalid { report, .. }) => Verdict::Invalid(report),
            Err(e) => Verdict::Failed(e.to_string()),
        },
    };
    FileOutcome {
        path: path.to_path_buf(),
        verdict,
    }
}

pub fn render_outcome(outcome: &FileOutcome, strict: bool) -> String {
    let mut out = String::new();
    let path = outcome.path.display();
    let status = if outcome.passed(strict) { "✓" } else { "✗" };
    match &outcome.verdict {
        Verdict::Valid(report) if report.is_empty() => {
            let _ = writeln!(out, "{} {}", status, path);
        }
        Verdict::Valid(report) | Verdict::Invalid(report) => {
            let _ = writeln!(
                out,
                "{} {} ({} error(s), {} warning(s))",
                status,
                path,
                report.error_count(),
                report.warning_count()
            );
            for diagnostic in report.diagnostics() {
                let _ = writeln!(out, "    {}", diagnostic);
            }
        }
        Verdict::Failed(message) => {
            let _ = writeln!(out, "{} {}", status, path);
            let _ = writeln!(out, "    {}", message);
        }
    }
    out
}

pub fn render_summary(outcomes: &[FileOutcome], failed: usize) -> String {
    let warnings: usize = outcomes
        .iter()
        .map(|o| match &o.verdict {
            Verdict::Valid(report) | Verdict::Invalid(report) => report.warning_count(),
            Verdict::Failed(_) => 0,
        })
        .sum();
    format!(
        "{} file(s) checked: {} passed, {} failed, {} warning(s)",
        outcomes.len(),
        outcomes.len() - failed,
        failed,
        warnings
    )
}

//! # Validation Module
//!
//! Semantic checks over a built [`InputDocument`]. Problems never abort the
//! run: every rule adds located diagnostics to one [`ValidationReport`], so a
//! user sees everything wrong with a file at once.
//!
//! - **Sections** ([`sections`]) - value ranges of `output` and `ga`
//! - **Records** ([`records`]) - gene/objective/similarity modules and their parameters
//! - **References** ([`references`]) - gene names and paths mentioned by parameters

pub mod records;
pub mod references;
pub mod sections;

use crate::core::diagnostics::ValidationReport;
use crate::core::models::document::InputDocument;
use crate::core::models::module::ModuleCategory;
use crate::core::schema::params::CheckOutcome;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Require every path parameter to exist on disk.
    pub check_paths: bool,
    /// Report modules missing from the catalog as warnings instead of errors.
    pub allow_unknown_modules: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_paths: false,
            allow_unknown_modules: true,
        }
    }
}

pub fn validate(document: &InputDocument, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut mentions = CheckOutcome::default();

    sections::check_output(&document.output, &mut report);
    sections::check_ga(&document.ga, &mut report);

    if let Some(similarity) = &document.similarity {
        records::check_similarity(similarity, options, &mut report, &mut mentions);
    }
    records::check_section(
        &document.genes,
        ModuleCategory::Gene,
        options,
        &mut report,
        &mut mentions,
    );
    records::check_section(
        &document.objectives,
        ModuleCategory::Objective,
        options,
        &mut report,
        &mut mentions,
    );
    records::check_weights(&document.objectives, &mut report);

    references::check_references(document, &mentions.references, &mut report);
    if options.check_paths {
        references::check_paths(document.base_dir(), &mentions.paths, &mut report);
    }

    debug!(
        "Validation finished: {} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
    report
}

use super::ValidationOptions;
use crate::core::diagnostics::ValidationReport;
use crate::core::models::module::{ModuleCategory, ModulePath};
use crate::core::models::records::{ObjectiveRecord, Params, Record};
use crate::core::models::similarity::SimilarityConfig;
use crate::core::schema::catalog;
use crate::core::schema::params::{CheckOutcome, ModuleSchema, check_value};
use std::collections::HashMap;
use tracing::trace;

/// Checks every record of one section and collects the references and paths
/// their parameters mention.
pub fn check_section<R: Record>(
    records: &[R],
    expected: ModuleCategory,
    options: &ValidationOptions,
    report: &mut ValidationReport,
    collected: &mut CheckOutcome,
) {
    if records.is_empty() {
        report.error(
            R::SECTION,
            format!("at least one {} record is required", expected),
        );
        return;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let location = format!("{}[{}]", R::SECTION, index);
        trace!("Checking {} '{}'", location, record.name());

        if let Some(&first) = seen.get(record.name()) {
            report.error(
                format!("{}.name", location),
                format!(
                    "duplicate name '{}', already used by {}[{}]",
                    record.name(),
                    R::SECTION,
                    first
                ),
            );
        } else {
            seen.insert(record.name(), index);
        }

        let Some(schema) = resolve_module(record.module(), expected, &location, options, report)
        else {
            continue;
        };

        let mut outcome = CheckOutcome::default();
        check_params(schema, record.params(), &location, report, &mut outcome);

        if expected == ModuleCategory::Gene {
            for reference in outcome.references.iter().filter(|r| r.name == record.name()) {
                report.error(
                    reference.location.clone(),
                    format!("gene '{}' cannot refer to itself", record.name()),
                );
            }
            outcome.references.retain(|r| r.name != record.name());
        }
        collected.merge(outcome);
    }
}

pub fn check_weights(objectives: &[ObjectiveRecord], report: &mut ValidationReport) {
    for (index, objective) in objectives.iter().enumerate() {
        let location = format!("objectives[{}].weight", index);
        if !objective.weight.is_finite() {
            report.error(location, "weight must be a finite number");
        } else if objective.weight == 0.0 {
            report.warning(
                location,
                format!(
                    "objective '{}' has zero weight and will not drive the search",
                    objective.name
                ),
            );
        }
    }
}

pub fn check_similarity(
    similarity: &SimilarityConfig,
    options: &ValidationOptions,
    report: &mut ValidationReport,
    collected: &mut CheckOutcome,
) {
    let Some(schema) = resolve_module(
        &similarity.module,
        ModuleCategory::Similarity,
        "similarity",
        options,
        report,
    ) else {
        return;
    };

    let mut outcome = CheckOutcome::default();
    for (index, spec) in schema.positional.iter().enumerate() {
        let location = format!("similarity.args[{}]", index);
        match similarity.args.get(index) {
            Some(value) => check_value(&spec.kind, value, &location, &mut outcome),
            None if spec.required => report.error(
                location,
                format!("missing positional argument '{}' ({})", spec.name, spec.kind),
            ),
            None => {}
        }
    }
    if similarity.args.len() > schema.positional.len() {
        report.error(
            "similarity.args",
            format!(
                "{} takes {} positional argument(s), found {}",
                schema.path,
                schema.positional.len(),
                similarity.args.len()
            ),
        );
    }

    check_params(
        schema,
        &similarity.kwargs,
        "similarity.kwargs",
        report,
        &mut outcome,
    );
    collected.merge(outcome);
}

/// Checks the module category and looks the module up in the catalog.
///
/// Returns the schema only for known modules of the right category.
fn resolve_module(
    module: &ModulePath,
    expected: ModuleCategory,
    location: &str,
    options: &ValidationOptions,
    report: &mut ValidationReport,
) -> Option<&'static ModuleSchema> {
    let module_location = format!("{}.module", location);
    let category = module.category();
    if category != expected && category != ModuleCategory::External {
        report.error(
            module_location,
            format!(
                "'{}' is a {} module, expected a {} module",
                module, category, expected
            ),
        );
        return None;
    }

    match catalog::lookup(module.as_str()) {
        Some(schema) => Some(schema),
        None => {
            let mut message = format!("'{}' is not a built-in module", module);
            if let Some(candidate) = catalog::suggest(module.as_str()) {
                message.push_str(&format!("; did you mean '{}'?", candidate));
            }
            if options.allow_unknown_modules {
                message.push_str("; its parameters are not checked");
                report.warning(module_location, message);
            } else {
                report.error(module_location, message);
            }
            None
        }
    }
}

fn check_params(
    schema: &ModuleSchema,
    params: &Params,
    location: &str,
    report: &mut ValidationReport,
    outcome: &mut CheckOutcome,
) {
    for spec in schema.required_params() {
        if !params.contains_key(spec.name) {
            report.error(
                format!("{}.{}", location, spec.name),
                format!(
                    "missing required parameter '{}' of {} ({})",
                    spec.name, schema.path, spec.kind
                ),
            );
        }
    }

    for (key, value) in params {
        let param_location = format!("{}.{}", location, key);
        match schema.param(key) {
            Some(spec) => check_value(&spec.kind, value, &param_location, outcome),
            None => report.warning(
                param_location,
                format!("'{}' is not a parameter of {}", key, schema.path),
            ),
        }
    }

    for (problem_location, message) in outcome.problems.drain(..) {
        report.error(problem_location, message);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{BASE, document};
    use super::*;
    use crate::core::models::document::InputDocument;
    use crate::core::schema::params::ReferenceKind;

    fn check_genes(
        doc: &InputDocument,
        options: &ValidationOptions,
    ) -> (ValidationReport, CheckOutcome) {
        let mut report = ValidationReport::new();
        let mut collected = CheckOutcome::default();
        check_section(&doc.genes, ModuleCategory::Gene, options, &mut report, &mut collected);
        (report, collected)
    }

    fn check_objectives(doc: &InputDocument) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut collected = CheckOutcome::default();
        check_section(
            &doc.objectives,
            ModuleCategory::Objective,
            &ValidationOptions::default(),
            &mut report,
            &mut collected,
        );
        check_weights(&doc.objectives, &mut report);
        report
    }

    fn check_sim(
        doc: &InputDocument,
        options: &ValidationOptions,
    ) -> (ValidationReport, CheckOutcome) {
        let mut report = ValidationReport::new();
        let mut collected = CheckOutcome::default();
        if let Some(similarity) = &doc.similarity {
            check_similarity(similarity, options, &mut report, &mut collected);
        }
        (report, collected)
    }

    #[test]
    fn valid_genes_collect_references_and_paths() {
        let (report, collected) = check_genes(&document(BASE), &ValidationOptions::default());
        assert!(report.is_empty(), "{}", report);
        assert_eq!(collected.paths.len(), 2);
        assert_eq!(collected.paths[0].location, "genes[0].path");
        assert_eq!(collected.references.len(), 1);
        assert_eq!(collected.references[0].name, "Ligand");
        assert_eq!(collected.references[0].kind, ReferenceKind::Molecule);
        assert_eq!(collected.references[0].location, "genes[2].target");
    }

    #[test]
    fn empty_sections_are_rejected() {
        let doc = document(BASE);
        let mut report = ValidationReport::new();
        let mut collected = CheckOutcome::default();
        check_section(
            &doc.objectives[..0],
            ModuleCategory::Objective,
            &ValidationOptions::default(),
            &mut report,
            &mut collected,
        );
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors().next().unwrap().location, "objectives");
    }

    #[test]
    fn duplicate_names_point_at_the_later_record() {
        let yaml = BASE
            .replace("name: Flex", "name: Ligand")
            .replace("target: Ligand", "target: Protein");
        let (report, _) = check_genes(&document(&yaml), &ValidationOptions::default());
        assert_eq!(report.error_count(), 1);
        let error = report.errors().next().unwrap();
        assert_eq!(error.location, "genes[2].name");
        assert!(error.message.contains("genes[1]"));
    }

    #[test]
    fn modules_from_the_wrong_section_are_errors() {
        let yaml = BASE.replace("module: gaudi.genes.torsion", "module: gaudi.objectives.hbonds");
        let (report, _) = check_genes(&document(&yaml), &ValidationOptions::default());
        assert!(report.mentions("genes[2].module"));
        assert!(report.errors().next().unwrap().message.contains("objective module"));
    }

    #[test]
    fn unknown_modules_warn_with_a_suggestion_unless_disallowed() {
        let yaml = BASE.replace("gaudi.genes.torsion", "gaudi.genes.torsoin");
        let doc = document(&yaml);

        let (relaxed, collected) = check_genes(&doc, &ValidationOptions::default());
        assert!(!relaxed.has_errors());
        let warning = relaxed.warnings().next().unwrap();
        assert_eq!(warning.location, "genes[2].module");
        assert!(warning.message.contains("gaudi.genes.torsion"));
        assert!(collected.references.is_empty());

        let strict = ValidationOptions {
            allow_unknown_modules: false,
            ..ValidationOptions::default()
        };
        let (report, _) = check_genes(&doc, &strict);
        assert!(report.mentions("genes[2].module"));
        assert!(report.has_errors());
    }

    #[test]
    fn external_modules_are_accepted_with_a_warning() {
        let yaml = BASE.replace("gaudi.genes.torsion", "mylab.genes.custom");
        let (report, _) = check_genes(&document(&yaml), &ValidationOptions::default());
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn missing_required_and_unknown_parameters_are_reported() {
        let yaml = BASE.replace("    path: protein.mol2\n", "    colour: blue\n");
        let (report, _) = check_genes(&document(&yaml), &ValidationOptions::default());
        assert!(report.errors().any(|d| d.location == "genes[0].path"));
        assert!(report.warnings().any(|d| d.location == "genes[0].colour"));
    }

    #[test]
    fn parameter_values_are_checked_against_their_kind() {
        let yaml = BASE.replace("flexibility: 360", "flexibility: 400");
        let (report, _) = check_genes(&document(&yaml), &ValidationOptions::default());
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors().next().unwrap().location, "genes[2].flexibility");
    }

    #[test]
    fn genes_cannot_refer_to_themselves() {
        let yaml = BASE
            .replace("name: Flex", "name: Self")
            .replace("target: Ligand", "target: Self");
        let (report, collected) = check_genes(&document(&yaml), &ValidationOptions::default());
        let error = report.errors().next().unwrap();
        assert_eq!(error.location, "genes[2].target");
        assert!(error.message.contains("itself"));
        assert!(collected.references.is_empty());
    }

    #[test]
    fn objective_list_elements_are_located_by_index() {
        let yaml = BASE.replace("probes: [Ligand]\n    which", "probes: [Ligand, 7]\n    which");
        let report = check_objectives(&document(&yaml));
        assert!(report.errors().any(|d| d.location == "objectives[0].probes[1]"));
    }

    #[test]
    fn zero_weight_is_a_warning() {
        let yaml = BASE.replace("weight: 1.0", "weight: 0");
        let report = check_objectives(&document(&yaml));
        assert!(!report.has_errors());
        let warning = report.warnings().next().unwrap();
        assert_eq!(warning.location, "objectives[1].weight");
    }

    #[test]
    fn rmsd_arguments_are_checked_positionally() {
        let yaml = format!("similarity:\n  args: [[Ligand], 2.5]\n{}", BASE);
        let (report, collected) = check_sim(&document(&yaml), &ValidationOptions::default());
        assert!(report.is_empty(), "{}", report);
        assert_eq!(collected.references[0].location, "similarity.args[0][0]");

        let yaml = format!("similarity:\n  args: [[Ligand], -1]\n{}", BASE);
        let (report, _) = check_sim(&document(&yaml), &ValidationOptions::default());
        assert!(report.mentions("similarity.args[1]"));
    }

    #[test]
    fn rmsd_reports_missing_and_extra_arguments() {
        let yaml = format!("similarity:\n  args: [[Ligand]]\n{}", BASE);
        let (report, _) = check_sim(&document(&yaml), &ValidationOptions::default());
        assert!(report.errors().any(|d| d.location == "similarity.args[1]"));

        let yaml = format!("similarity:\n  args: [[Ligand], 1.0, extra]\n{}", BASE);
        let (report, _) = check_sim(&document(&yaml), &ValidationOptions::default());
        assert!(report.errors().any(|d| d.location == "similarity.args"));
    }

    #[test]
    fn rmsd_kwargs_are_unknown_parameters() {
        let yaml = format!(
            "similarity:\n  args: [[Ligand], 1.0]\n  kwargs:\n    weights: mass\n{}",
            BASE
        );
        let (report, _) = check_sim(&document(&yaml), &ValidationOptions::default());
        assert!(!report.has_errors());
        assert!(report.warnings().any(|d| d.location == "similarity.kwargs.weights"));
    }

    #[test]
    fn similarity_module_must_be_a_similarity_function() {
        let yaml = format!(
            "similarity:\n  module: gaudi.genes.molecule\n{}",
            BASE
        );
        let (report, _) = check_sim(&document(&yaml), &ValidationOptions::default());
        assert!(report.errors().any(|d| d.location == "similarity.module"));
    }
}

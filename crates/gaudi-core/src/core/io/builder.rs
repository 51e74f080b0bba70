use super::raw::{RawDocument, RawGa, RawOutput, RawRecord, RawSimilarity};
use crate::core::diagnostics::ValidationReport;
use crate::core::models::defaults::DefaultsConfig;
use crate::core::models::document::InputDocument;
use crate::core::models::ga::GaConfig;
use crate::core::models::module::ModulePath;
use crate::core::models::output::OutputConfig;
use crate::core::models::records::{GeneRecord, ObjectiveRecord, Params};
use crate::core::models::similarity::SimilarityConfig;
use crate::core::utils::naming::random_name;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Where a raw document came from and which defaults fill its gaps.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub source: Option<PathBuf>,
    pub defaults: DefaultsConfig,
}

impl BuildContext {
    pub fn for_file(path: &Path) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            defaults: DefaultsConfig::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: DefaultsConfig) -> Self {
        self.defaults = defaults;
        self
    }

    fn base_dir(&self) -> PathBuf {
        self.source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Turns a raw document into a typed one, applying defaults.
///
/// Every structural problem is collected; if any is found the whole report is
/// returned instead of a document.
pub fn build_document(
    raw: RawDocument,
    context: &BuildContext,
) -> Result<InputDocument, ValidationReport> {
    let mut report = ValidationReport::new();
    let defaults = &context.defaults;

    let output = build_output(raw.output.unwrap_or_default(), context, &mut report);
    let ga = build_ga(raw.ga.unwrap_or_default(), defaults, &mut report);
    let similarity = raw
        .similarity
        .and_then(|s| build_similarity(s, defaults, &mut report));

    let genes: Vec<GeneRecord> = raw
        .genes
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(i, r)| build_gene(i, r, &mut report))
        .collect();
    let objectives: Vec<ObjectiveRecord> = raw
        .objectives
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(i, r)| build_objective(i, r, &mut report))
        .collect();

    if report.has_errors() {
        debug!(
            "Document build failed with {} error(s)",
            report.error_count()
        );
        return Err(report);
    }

    debug!(
        "Built document with {} gene(s) and {} objective(s)",
        genes.len(),
        objectives.len()
    );
    Ok(InputDocument {
        source: context.source.clone(),
        output,
        ga,
        similarity,
        genes,
        objectives,
    })
}

fn build_output(
    raw: RawOutput,
    context: &BuildContext,
    report: &mut ValidationReport,
) -> OutputConfig {
    let defaults = &context.defaults;
    let path = raw.path.unwrap_or_else(|| defaults.output_path.clone());
    OutputConfig {
        path: resolve_relative(&context.base_dir(), Path::new(&path)),
        name: raw
            .name
            .unwrap_or_else(|| random_name(defaults.name_length)),
        precision: count(raw.precision, defaults.precision, "output.precision", report),
        compress: raw.compress.unwrap_or(defaults.compress),
        history: raw.history.unwrap_or(defaults.history),
        pareto: raw.pareto.unwrap_or(defaults.pareto),
        verbose: raw.verbose.unwrap_or(defaults.verbose),
        check_every: count(
            raw.check_every,
            defaults.check_every,
            "output.check_every",
            report,
        ),
        prompt_on_exception: raw
            .prompt_on_exception
            .unwrap_or(defaults.prompt_on_exception),
    }
}

fn build_ga(raw: RawGa, defaults: &DefaultsConfig, report: &mut ValidationReport) -> GaConfig {
    GaConfig {
        population: count(raw.population, defaults.population, "ga.population", report),
        generations: count(
            raw.generations,
            defaults.generations,
            "ga.generations",
            report,
        ),
        mu: raw.mu.unwrap_or(defaults.mu),
        lambda_: raw.lambda_.unwrap_or(defaults.lambda_),
        mut_eta: raw.mut_eta.unwrap_or(defaults.mut_eta),
        mut_pb: raw.mut_pb.unwrap_or(defaults.mut_pb),
        mut_indpb: raw.mut_indpb.unwrap_or(defaults.mut_indpb),
        cx_eta: raw.cx_eta.unwrap_or(defaults.cx_eta),
        cx_pb: raw.cx_pb.unwrap_or(defaults.cx_pb),
    }
}

fn build_similarity(
    raw: RawSimilarity,
    defaults: &DefaultsConfig,
    report: &mut ValidationReport,
) -> Option<SimilarityConfig> {
    let module = raw
        .module
        .unwrap_or_else(|| defaults.similarity_module.clone());
    let module = parse_module(&module, "similarity.module", report)?;
    Some(SimilarityConfig {
        module,
        args: raw.args.unwrap_or_default(),
        kwargs: raw.kwargs.unwrap_or_default(),
    })
}

fn build_gene(index: usize, raw: RawRecord, report: &mut ValidationReport) -> Option<GeneRecord> {
    let location = format!("genes[{}]", index);
    let (name, module) = record_identity(&location, raw.name, raw.module, report);
    Some(GeneRecord {
        name: name?,
        module: module?,
        params: raw.params,
    })
}

fn build_objective(
    index: usize,
    raw: RawRecord,
    report: &mut ValidationReport,
) -> Option<ObjectiveRecord> {
    let location = format!("objectives[{}]", index);
    let (name, module) = record_identity(&location, raw.name, raw.module, report);
    let mut params: Params = raw.params;
    let weight = match params.remove("weight") {
        Some(value) => match value.as_f64() {
            Some(w) => Some(w),
            None => {
                report.error(
                    format!("{}.weight", location),
                    "`weight` must be a number",
                );
                None
            }
        },
        None => {
            report.error(
                format!("{}.weight", location),
                "objectives require a `weight`",
            );
            None
        }
    };
    Some(ObjectiveRecord {
        name: name?,
        module: module?,
        weight: weight?,
        params,
    })
}

fn record_identity(
    location: &str,
    name: Option<String>,
    module: Option<String>,
    report: &mut ValidationReport,
) -> (Option<String>, Option<ModulePath>) {
    let name = match name {
        Some(n) if !n.trim().is_empty() => Some(n.trim().to_string()),
        Some(_) => {
            report.error(format!("{}.name", location), "`name` cannot be blank");
            None
        }
        None => {
            report.error(format!("{}.name", location), "missing required key `name`");
            None
        }
    };
    let module = match module {
        Some(m) => parse_module(&m, &format!("{}.module", location), report),
        None => {
            report.error(
                format!("{}.module", location),
                "missing required key `module`",
            );
            None
        }
    };
    (name, module)
}

fn parse_module(value: &str, location: &str, report: &mut ValidationReport) -> Option<ModulePath> {
    value
        .parse::<ModulePath>()
        .map_err(|e| report.error(location, e.to_string()))
        .ok()
}

fn count(
    value: Option<i64>,
    default: usize,
    location: &str,
    report: &mut ValidationReport,
) -> usize {
    match value {
        None => default,
        Some(n) => usize::try_from(n).unwrap_or_else(|_| {
            report.error(location, format!("must be a non-negative integer, found {}", n));
            default
        }),
    }
}

fn resolve_relative(base_dir: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    };
    let cleaned: PathBuf = joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::format::InputFormat;
    use crate::core::io::reader::parse_document;

    fn raw(yaml: &str) -> RawDocument {
        parse_document(yaml, InputFormat::Yaml, "test").unwrap()
    }

    fn context() -> BuildContext {
        BuildContext::for_file(Path::new("/jobs/docking/input.yaml"))
    }

    const VALID: &str = r#"
genes:
  - name: Ligand
    module: gaudi.genes.molecule
    path: ligand.mol2
objectives:
  - name: Clashes
    module: gaudi.objectives.contacts
    weight: -1
    probes: [Ligand]
"#;

    #[test]
    fn absent_sections_take_default_values() {
        let doc = build_document(raw(VALID), &context()).unwrap();
        let defaults = DefaultsConfig::default();

        assert_eq!(doc.ga.population, defaults.population);
        assert_eq!(doc.ga.generations, defaults.generations);
        assert_eq!(doc.ga.mu, defaults.mu);
        assert_eq!(doc.ga.cx_pb, defaults.cx_pb);
        assert_eq!(doc.output.precision, defaults.precision);
        assert_eq!(doc.output.check_every, defaults.check_every);
        assert!(doc.output.compress);
        assert!(!doc.output.history);
        assert_eq!(doc.output.name.len(), defaults.name_length);
        assert!(doc.similarity.is_none());
    }

    #[test]
    fn default_output_path_is_the_input_directory() {
        let doc = build_document(raw(VALID), &context()).unwrap();
        assert_eq!(doc.output.path, PathBuf::from("/jobs/docking"));
        assert_eq!(doc.source, Some(PathBuf::from("/jobs/docking/input.yaml")));
    }

    #[test]
    fn relative_output_path_is_resolved_against_the_input_directory() {
        let yaml = format!("output:\n  path: ./results/run1\n{}", VALID);
        let doc = build_document(raw(&yaml), &context()).unwrap();
        assert_eq!(doc.output.path, PathBuf::from("/jobs/docking/results/run1"));
    }

    #[test]
    fn absolute_output_path_is_kept() {
        let yaml = format!("output:\n  path: /scratch/out\n{}", VALID);
        let doc = build_document(raw(&yaml), &context()).unwrap();
        assert_eq!(doc.output.path, PathBuf::from("/scratch/out"));
    }

    #[test]
    fn in_memory_documents_resolve_against_current_directory() {
        let doc = build_document(raw(VALID), &BuildContext::default()).unwrap();
        assert_eq!(doc.output.path, PathBuf::from("."));
        assert!(doc.source.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let yaml = format!(
            "output:\n  name: run42\n  compress: false\n  check_every: 0\nga:\n  population: 12\n  mu: 0.5\n  cx_pb: 0.4\n{}",
            VALID
        );
        let doc = build_document(raw(&yaml), &context()).unwrap();
        assert_eq!(doc.output.name, "run42");
        assert!(!doc.output.compress);
        assert_eq!(doc.output.check_every, 0);
        assert_eq!(doc.ga.population, 12);
        assert_eq!(doc.ga.mu, 0.5);
        assert_eq!(doc.ga.cx_pb, 0.4);
    }

    #[test]
    fn weight_is_lifted_out_of_objective_params() {
        let doc = build_document(raw(VALID), &context()).unwrap();
        let objective = &doc.objectives[0];
        assert_eq!(objective.weight, -1.0);
        assert!(!objective.params.contains_key("weight"));
        assert!(objective.params.contains_key("probes"));
        assert!(doc.genes[0].params.contains_key("path"));
    }

    #[test]
    fn similarity_section_fills_module_args_and_kwargs() {
        let yaml = format!("similarity:\n  args: [[Ligand], 2.5]\n{}", VALID);
        let doc = build_document(raw(&yaml), &context()).unwrap();
        let similarity = doc.similarity.unwrap();
        assert_eq!(similarity.module.as_str(), "gaudi.similarity.rmsd");
        assert_eq!(similarity.args.len(), 2);
        assert!(similarity.kwargs.is_empty());
    }

    #[test]
    fn missing_name_and_module_are_all_reported() {
        let yaml = r#"
genes:
  - path: ligand.mol2
  - name: "  "
    module: gaudi.genes.molecule
objectives:
  - name: Clashes
"#;
        let report = build_document(raw(yaml), &context()).unwrap_err();
        let locations: Vec<_> = report
            .errors()
            .map(|d| d.location.as_str())
            .collect();
        assert_eq!(
            locations,
            vec![
                "genes[0].name",
                "genes[0].module",
                "genes[1].name",
                "objectives[0].module",
                "objectives[0].weight",
            ]
        );
    }

    #[test]
    fn malformed_module_path_is_reported() {
        let yaml = "genes:\n  - name: Ligand\n    module: gaudi/genes/molecule\n";
        let report = build_document(raw(yaml), &context()).unwrap_err();
        assert!(report.mentions("genes[0].module"));
    }

    #[test]
    fn non_numeric_weight_is_reported() {
        let yaml =
            "objectives:\n  - name: A\n    module: gaudi.objectives.hbonds\n    weight: high\n";
        let report = build_document(raw(yaml), &context()).unwrap_err();
        let error = report.errors().next().unwrap();
        assert_eq!(error.location, "objectives[0].weight");
        assert!(error.message.contains("number"));
    }

    #[test]
    fn negative_counts_are_reported() {
        let yaml = format!("ga:\n  population: -5\noutput:\n  precision: -1\n{}", VALID);
        let report = build_document(raw(&yaml), &context()).unwrap_err();
        assert!(report.mentions("ga.population"));
        assert!(report.mentions("output.precision"));
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn negative_check_every_is_reported() {
        let yaml = format!("output:\n  check_every: -1\n{}", VALID);
        let report = build_document(raw(&yaml), &context()).unwrap_err();
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors().next().unwrap().location, "output.check_every");
    }

    #[test]
    fn bare_similarity_key_takes_every_default() {
        let yaml = format!("similarity:\n{}", VALID);
        let doc = build_document(raw(&yaml), &context()).unwrap();
        let similarity = doc.similarity.unwrap();
        assert_eq!(similarity.module.as_str(), "gaudi.similarity.rmsd");
        assert!(similarity.args.is_empty());
        assert!(similarity.kwargs.is_empty());
    }

    #[test]
    fn resolve_relative_drops_current_dir_components() {
        assert_eq!(
            resolve_relative(Path::new("."), Path::new(".")),
            PathBuf::from(".")
        );
        assert_eq!(
            resolve_relative(Path::new("./jobs"), Path::new("./out")),
            PathBuf::from("jobs/out")
        );
    }
}

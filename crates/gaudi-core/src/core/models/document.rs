use super::ga::GaConfig;
use super::output::OutputConfig;
use super::records::{GeneRecord, ObjectiveRecord};
use super::similarity::SimilarityConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MOLECULE_MODULE: &str = "gaudi.genes.molecule";

/// A fully resolved GaudiMM input document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputDocument {
    /// File the document was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
    pub output: OutputConfig,
    pub ga: GaConfig,
    /// `None` when the section is absent: no similarity pruning is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<SimilarityConfig>,
    pub genes: Vec<GeneRecord>,
    pub objectives: Vec<ObjectiveRecord>,
}

impl InputDocument {
    pub fn gene(&self, name: &str) -> Option<&GeneRecord> {
        self.genes.iter().find(|g| g.name == name)
    }

    pub fn objective(&self, name: &str) -> Option<&ObjectiveRecord> {
        self.objectives.iter().find(|o| o.name == name)
    }

    pub fn gene_names(&self) -> impl Iterator<Item = &str> {
        self.genes.iter().map(|g| g.name.as_str())
    }

    /// Genes whose module is the molecule gene; other records refer to molecules by these names.
    pub fn molecule_genes(&self) -> impl Iterator<Item = &GeneRecord> {
        self.genes
            .iter()
            .filter(|g| g.module.as_str() == MOLECULE_MODULE)
    }

    pub fn is_molecule(&self, name: &str) -> bool {
        self.molecule_genes().any(|g| g.name == name)
    }

    /// Fitness weights in objective order.
    pub fn weights(&self) -> Vec<f64> {
        self.objectives.iter().map(|o| o.weight).collect()
    }

    /// Directory that relative paths inside the document are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.source
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::records::Params;

    fn gene(name: &str, module: &str) -> GeneRecord {
        GeneRecord {
            name: name.to_string(),
            module: module.parse().unwrap(),
            params: Params::new(),
        }
    }

    fn objective(name: &str, weight: f64) -> ObjectiveRecord {
        ObjectiveRecord {
            name: name.to_string(),
            module: "gaudi.objectives.contacts".parse().unwrap(),
            weight,
            params: Params::new(),
        }
    }

    fn document() -> InputDocument {
        InputDocument {
            source: Some(PathBuf::from("/jobs/input.yaml")),
            output: OutputConfig {
                path: PathBuf::from("/jobs"),
                name: "run".to_string(),
                precision: 3,
                compress: true,
                history: false,
                pareto: false,
                verbose: true,
                check_every: 10,
                prompt_on_exception: true,
            },
            ga: GaConfig {
                population: 10,
                generations: 5,
                mu: 0.75,
                lambda_: 0.75,
                mut_eta: 5.0,
                mut_pb: 0.1,
                mut_indpb: 0.05,
                cx_eta: 5.0,
                cx_pb: 0.5,
            },
            similarity: None,
            genes: vec![
                gene("Protein", MOLECULE_MODULE),
                gene("Ligand", MOLECULE_MODULE),
                gene("Torsion", "gaudi.genes.torsion"),
            ],
            objectives: vec![objective("Clashes", -1.0), objective("Contacts", 1.0)],
        }
    }

    #[test]
    fn lookups_find_records_by_name() {
        let doc = document();
        assert_eq!(doc.gene("Ligand").unwrap().name, "Ligand");
        assert!(doc.gene("Missing").is_none());
        assert!(doc.objective("Clashes").is_some());
        assert_eq!(
            doc.gene_names().collect::<Vec<_>>(),
            vec!["Protein", "Ligand", "Torsion"]
        );
    }

    #[test]
    fn molecule_genes_are_filtered_by_module() {
        let doc = document();
        assert_eq!(doc.molecule_genes().count(), 2);
        assert!(doc.is_molecule("Protein"));
        assert!(!doc.is_molecule("Torsion"));
    }

    #[test]
    fn weights_follow_objective_order() {
        let doc = document();
        assert_eq!(doc.weights(), vec![-1.0, 1.0]);
        assert!(!doc.objectives[0].is_maximized());
        assert!(doc.objectives[1].is_maximized());
    }

    #[test]
    fn base_dir_is_parent_of_source_or_current_dir() {
        let mut doc = document();
        assert_eq!(doc.base_dir(), Path::new("/jobs"));
        doc.source = None;
        assert_eq!(doc.base_dir(), Path::new("."));
    }
}

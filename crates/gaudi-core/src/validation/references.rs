use crate::core::diagnostics::ValidationReport;
use crate::core::models::document::{InputDocument, MOLECULE_MODULE};
use crate::core::schema::params::{PathMention, Reference, ReferenceKind};
use std::path::Path;

/// Resolves every gene name mentioned by a parameter against the document's genes.
pub fn check_references(
    document: &InputDocument,
    references: &[Reference],
    report: &mut ValidationReport,
) {
    for reference in references {
        let gene = document.gene(&reference.name);
        match (reference.kind, gene) {
            (_, None) => {
                let what = match reference.kind {
                    ReferenceKind::Gene => "gene",
                    ReferenceKind::Molecule => "molecule",
                };
                report.error(
                    reference.location.clone(),
                    format!(
                        "unknown {} '{}'; defined genes: {}",
                        what,
                        reference.name,
                        defined_names(document)
                    ),
                );
            }
            (ReferenceKind::Molecule, Some(gene)) if gene.module.as_str() != MOLECULE_MODULE => {
                report.error(
                    reference.location.clone(),
                    format!(
                        "'{}' is not a molecule gene (its module is {}, expected {})",
                        reference.name, gene.module, MOLECULE_MODULE
                    ),
                );
            }
            _ => {}
        }
    }
}

/// Requires every path parameter to exist, relative ones resolved against `base_dir`.
pub fn check_paths(base_dir: &Path, paths: &[PathMention], report: &mut ValidationReport) {
    for mention in paths {
        let resolved = base_dir.join(&mention.path);
        if !resolved.exists() {
            report.error(
                mention.location.clone(),
                format!("path '{}' does not exist", resolved.display()),
            );
        }
    }
}

fn defined_names(document: &InputDocument) -> String {
    let names: Vec<&str> = document.gene_names().collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{BASE, document};
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn reference(location: &str, name: &str, kind: ReferenceKind) -> Reference {
        Reference {
            location: location.to_string(),
            name: name.to_string(),
            kind,
        }
    }

    fn mention(location: &str, path: &str) -> PathMention {
        PathMention {
            location: location.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn existing_genes_and_molecules_resolve() {
        let doc = document(BASE);
        let mut report = ValidationReport::new();
        check_references(
            &doc,
            &[
                reference("a", "Ligand", ReferenceKind::Molecule),
                reference("b", "Flex", ReferenceKind::Gene),
            ],
            &mut report,
        );
        assert!(report.is_empty(), "{}", report);
    }

    #[test]
    fn unknown_names_list_the_defined_genes() {
        let doc = document(BASE);
        let mut report = ValidationReport::new();
        check_references(
            &doc,
            &[reference("objectives[0].probes[0]", "Ghost", ReferenceKind::Molecule)],
            &mut report,
        );
        let error = report.errors().next().unwrap();
        assert_eq!(error.location, "objectives[0].probes[0]");
        assert!(error.message.contains("unknown molecule 'Ghost'"));
        assert!(error.message.contains("Protein, Ligand, Flex"));
    }

    #[test]
    fn molecule_references_must_name_molecule_genes() {
        let doc = document(BASE);
        let mut report = ValidationReport::new();
        check_references(
            &doc,
            &[reference("x", "Flex", ReferenceKind::Molecule)],
            &mut report,
        );
        assert_eq!(report.error_count(), 1);
        assert!(report.errors().next().unwrap().message.contains("not a molecule gene"));
    }

    #[test]
    fn paths_are_resolved_against_the_base_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ligand.mol2"), "").unwrap();
        fs::create_dir(dir.path().join("conformers")).unwrap();

        let mut report = ValidationReport::new();
        check_paths(
            dir.path(),
            &[
                mention("genes[0].path", "ligand.mol2"),
                mention("genes[1].path", "conformers"),
                mention("genes[2].path", "missing.pdb"),
            ],
            &mut report,
        );
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors().next().unwrap().location, "genes[2].path");
    }

    #[test]
    fn absolute_paths_ignore_the_base_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("protein.pdb");
        fs::write(&file, "").unwrap();

        let mut report = ValidationReport::new();
        check_paths(
            Path::new("/nonexistent/base"),
            &[mention("genes[0].path", &file.to_string_lossy())],
            &mut report,
        );
        assert!(report.is_empty());
    }
}

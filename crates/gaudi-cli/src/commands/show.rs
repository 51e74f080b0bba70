use crate::cli::ShowArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use gaudimm::core::io::format::InputFormat;
use gaudimm::core::io::writer::{render_document, write_document};
use gaudimm::validation::ValidationOptions;
use gaudimm::workflows::load::from_raw;
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    let app = build_config(&args.input, &args.overrides, ValidationOptions::default())?;
    let loaded = from_raw(app.raw, Some(&app.input_path), &app.load_options)?;
    for warning in loaded.report.warnings() {
        eprintln!("{}", warning);
    }

    let format = output_format(&args);
    match &args.output {
        Some(path) => {
            info!("Writing normalized {} document to {:?}", format, path);
            write_document(&loaded.document, path, format)?;
            println!("Normalized input written to: {}", path.display());
        }
        None => print!("{}", render_document(&loaded.document, format)?),
    }
    Ok(())
}

fn output_format(args: &ShowArgs) -> InputFormat {
    match (args.format, &args.output) {
        (Some(format), _) => format.into(),
        (None, Some(path)) => InputFormat::from_path(path),
        (None, None) => InputFormat::Yaml,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{FormatArg, InputOverrides};
    use crate::error::CliError;
    use gaudimm::core::io::reader::read_document;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    const INPUT: &str = r#"
output:
  name: shown
genes:
  - name: Ligand
    module: gaudi.genes.molecule
    path: ligand.mol2
objectives:
  - name: HBonds
    module: gaudi.objectives.hbonds
    weight: 1.0
    probes: [Ligand]
"#;

    fn args(input: &Path, output: Option<PathBuf>, format: Option<FormatArg>) -> ShowArgs {
        ShowArgs {
            input: input.to_path_buf(),
            format,
            output,
            overrides: InputOverrides {
                generations: Some(3),
                ..InputOverrides::default()
            },
        }
    }

    #[test]
    fn format_follows_flag_then_output_extension() {
        let input = Path::new("in.yaml");
        assert_eq!(output_format(&args(input, None, None)), InputFormat::Yaml);
        assert_eq!(
            output_format(&args(input, Some(PathBuf::from("out.toml")), None)),
            InputFormat::Toml
        );
        assert_eq!(
            output_format(&args(
                input,
                Some(PathBuf::from("out.toml")),
                Some(FormatArg::Yaml)
            )),
            InputFormat::Yaml
        );
    }

    #[test]
    fn writes_the_normalized_document_with_overrides() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.yaml");
        fs::write(&input, INPUT).unwrap();
        let output = dir.path().join("normalized.toml");

        run(args(&input, Some(output.clone()), None)).unwrap();

        let raw = read_document(&output).unwrap();
        let ga = raw.ga.unwrap();
        assert_eq!(ga.generations, Some(3));
        assert_eq!(ga.population, Some(200));
        assert_eq!(raw.output.unwrap().name.as_deref(), Some("shown"));
    }

    #[test]
    fn invalid_inputs_are_not_shown() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.yaml");
        fs::write(&input, INPUT.replace("[Ligand]", "[Nothing]")).unwrap();
        let output = dir.path().join("normalized.yaml");

        let err = run(args(&input, Some(output.clone()), None)).unwrap_err();
        assert!(matches!(err, CliError::Load(_)));
        assert!(err.report().is_some());
        assert!(!output.exists());
    }
}

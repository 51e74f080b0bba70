use super::models::AppConfig;
use super::overrides::apply_set_values;
use crate::cli::InputOverrides;
use crate::error::Result;
use gaudimm::core::io::raw::RawDocument;
use gaudimm::core::io::reader::read_document;
use gaudimm::validation::ValidationOptions;
use gaudimm::workflows::load::LoadOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn build_config(
    input: &Path,
    overrides: &InputOverrides,
    validation: ValidationOptions,
) -> Result<AppConfig> {
    let mut raw = read_document(input)?;
    apply_set_values(&mut raw, &overrides.set_values)?;
    apply_flags(&mut raw, overrides)?;

    Ok(AppConfig {
        input_path: input.to_path_buf(),
        raw,
        load_options: LoadOptions {
            validation,
            ..LoadOptions::default()
        },
    })
}

fn apply_flags(raw: &mut RawDocument, overrides: &InputOverrides) -> Result<()> {
    if let Some(population) = overrides.population {
        debug!("Overriding ga.population with {}", population);
        raw.ga.get_or_insert_with(Default::default).population = Some(to_count(population));
    }
    if let Some(generations) = overrides.generations {
        debug!("Overriding ga.generations with {}", generations);
        raw.ga.get_or_insert_with(Default::default).generations = Some(to_count(generations));
    }
    if let Some(path) = &overrides.output_path {
        let path = absolute_from_cwd(path)?;
        debug!("Overriding output.path with {:?}", path);
        raw.output.get_or_insert_with(Default::default).path =
            Some(path.to_string_lossy().to_string());
    }
    if let Some(name) = &overrides.name {
        raw.output.get_or_insert_with(Default::default).name = Some(name.clone());
    }
    Ok(())
}

fn to_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Paths given on the command line are relative to where the command runs,
/// not to the input file.
fn absolute_from_cwd(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

use crate::error::{CliError, Result};
use crate::utils::parser::parse_key_value;
use gaudimm::core::io::raw::{RawDocument, RawGa, RawOutput};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Keys accepted by `--set`.
pub const SET_KEYS: &[&str] = &[
    "output.path",
    "output.name",
    "output.precision",
    "output.compress",
    "output.history",
    "output.pareto",
    "output.verbose",
    "output.check_every",
    "output.prompt_on_exception",
    "ga.population",
    "ga.generations",
    "ga.mu",
    "ga.lambda_",
    "ga.mut_eta",
    "ga.mut_pb",
    "ga.mut_indpb",
    "ga.cx_eta",
    "ga.cx_pb",
    "similarity.module",
];

pub fn apply_set_values(raw: &mut RawDocument, set_values: &[String]) -> Result<()> {
    for kv_pair in set_values {
        let (key, value) =
            parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        debug!("Applying override {} = {}", key, value);

        match key {
            "output.path" => output(raw).path = Some(value.to_string()),
            "output.name" => output(raw).name = Some(value.to_string()),
            "output.precision" => output(raw).precision = Some(scalar(key, value)?),
            "output.compress" => output(raw).compress = Some(scalar(key, value)?),
            "output.history" => output(raw).history = Some(scalar(key, value)?),
            "output.pareto" => output(raw).pareto = Some(scalar(key, value)?),
            "output.verbose" => output(raw).verbose = Some(scalar(key, value)?),
            "output.check_every" => output(raw).check_every = Some(scalar(key, value)?),
            "output.prompt_on_exception" => {
                output(raw).prompt_on_exception = Some(scalar(key, value)?)
            }
            "ga.population" => ga(raw).population = Some(scalar(key, value)?),
            "ga.generations" => ga(raw).generations = Some(scalar(key, value)?),
            "ga.mu" => ga(raw).mu = Some(scalar(key, value)?),
            "ga.lambda_" => ga(raw).lambda_ = Some(scalar(key, value)?),
            "ga.mut_eta" => ga(raw).mut_eta = Some(scalar(key, value)?),
            "ga.mut_pb" => ga(raw).mut_pb = Some(scalar(key, value)?),
            "ga.mut_indpb" => ga(raw).mut_indpb = Some(scalar(key, value)?),
            "ga.cx_eta" => ga(raw).cx_eta = Some(scalar(key, value)?),
            "ga.cx_pb" => ga(raw).cx_pb = Some(scalar(key, value)?),
            "similarity.module" => {
                raw.similarity.get_or_insert_with(Default::default).module =
                    Some(value.to_string())
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'. Supported keys: {}",
                    key,
                    SET_KEYS.join(", ")
                )));
            }
        }
    }
    Ok(())
}

fn output(raw: &mut RawDocument) -> &mut RawOutput {
    raw.output.get_or_insert_with(Default::default)
}

fn ga(raw: &mut RawDocument) -> &mut RawGa {
    raw.ga.get_or_insert_with(Default::default)
}

/// Parses `value` as a YAML scalar of the key's type.
fn scalar<T: DeserializeOwned>(key: &str, value: &str) -> Result<T> {
    serde_yaml::from_str(value).map_err(|e| {
        CliError::Config(format!("Invalid value for {}: '{}' ({})", key, value, e))
    })
}

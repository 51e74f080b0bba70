use crate::core::schema::params::value_type;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// An input document exactly as written, before defaults are applied.
///
/// Unknown keys in the fixed sections are rejected by the parser; records keep
/// their module-specific keys in `params`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawDocument {
    pub output: Option<RawOutput>,
    pub ga: Option<RawGa>,
    #[serde(default, deserialize_with = "present_section")]
    pub similarity: Option<RawSimilarity>,
    pub genes: Option<Vec<RawRecord>>,
    pub objectives: Option<Vec<RawRecord>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawOutput {
    pub path: Option<String>,
    pub name: Option<String>,
    pub precision: Option<i64>,
    pub compress: Option<bool>,
    pub history: Option<bool>,
    pub pareto: Option<bool>,
    pub verbose: Option<bool>,
    pub check_every: Option<i64>,
    pub prompt_on_exception: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawGa {
    pub population: Option<i64>,
    pub generations: Option<i64>,
    pub mu: Option<f64>,
    pub lambda_: Option<f64>,
    pub mut_eta: Option<f64>,
    pub mut_pb: Option<f64>,
    pub mut_indpb: Option<f64>,
    pub cx_eta: Option<f64>,
    pub cx_pb: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawSimilarity {
    pub module: Option<String>,
    pub args: Option<Vec<Value>>,
    pub kwargs: Option<BTreeMap<String, Value>>,
}

/// A gene or objective entry. `weight` stays in `params` until the builder
/// knows which section the record belongs to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawRecord {
    pub name: Option<String>,
    pub module: Option<String>,
    pub params: BTreeMap<String, Value>,
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut record = RawRecord::default();
        for (key, value) in Mapping::deserialize(deserializer)? {
            let key = match key {
                Value::String(key) => key,
                other => {
                    return Err(de::Error::custom(format!(
                        "record keys must be strings, found {} key {}",
                        value_type(&other),
                        inline(&other)
                    )));
                }
            };
            match key.as_str() {
                "name" => record.name = text_field("name", value)?,
                "module" => record.module = text_field("module", value)?,
                _ => {
                    record.params.insert(key, value);
                }
            }
        }
        Ok(record)
    }
}

fn text_field<E: de::Error>(key: &str, value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        other => Err(E::custom(format!(
            "`{}` must be a string, found {}",
            key,
            value_type(&other)
        ))),
    }
}

fn inline(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// A section written as a bare key (`similarity:`) is present with every
/// field defaulted; only a missing key means the section is absent.
fn present_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

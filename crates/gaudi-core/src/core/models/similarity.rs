use super::module::ModulePath;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// The function used to decide whether two individuals are too alike to both
/// stay in the hall of fame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityConfig {
    pub module: ModulePath,
    pub args: Vec<Value>,
    pub kwargs: BTreeMap<String, Value>,
}

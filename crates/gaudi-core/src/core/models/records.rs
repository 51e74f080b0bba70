use super::module::ModulePath;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Module-specific keys of a gene or objective record.
pub type Params = BTreeMap<String, Value>;

/// Shared view over gene and objective records.
pub trait Record {
    /// Name of the document section holding this kind of record.
    const SECTION: &'static str;

    fn name(&self) -> &str;
    fn module(&self) -> &ModulePath;
    fn params(&self) -> &Params;

    fn param(&self, key: &str) -> Option<&Value> {
        self.params().get(key)
    }
}

/// One searchable degree of freedom of the modeled system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneRecord {
    pub name: String,
    pub module: ModulePath,
    #[serde(flatten)]
    pub params: Params,
}

/// One fitness term evaluated against every candidate solution.
///
/// The sign of `weight` selects maximization (positive) or minimization (negative).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveRecord {
    pub name: String,
    pub module: ModulePath,
    pub weight: f64,
    #[serde(flatten)]
    pub params: Params,
}

impl ObjectiveRecord {
    pub fn is_maximized(&self) -> bool {
        self.weight > 0.0
    }
}

impl Record for GeneRecord {
    const SECTION: &'static str = "genes";

    fn name(&self) -> &str {
        &self.name
    }
    fn module(&self) -> &ModulePath {
        &self.module
    }
    fn params(&self) -> &Params {
        &self.params
    }
}

impl Record for ObjectiveRecord {
    const SECTION: &'static str = "objectives";

    fn name(&self) -> &str {
        &self.name
    }
    fn module(&self) -> &ModulePath {
        &self.module
    }
    fn params(&self) -> &Params {
        &self.params
    }
}

use crate::core::utils::identifiers::is_identifier;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const GENES_PREFIX: &str = "gaudi.genes.";
const OBJECTIVES_PREFIX: &str = "gaudi.objectives.";
const SIMILARITY_PREFIX: &str = "gaudi.similarity.";

/// The role a module plays, derived from its package prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Gene,
    Objective,
    Similarity,
    /// Outside the `gaudi` packages; nothing is known about its parameters.
    External,
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModuleCategory::Gene => "gene",
            ModuleCategory::Objective => "objective",
            ModuleCategory::Similarity => "similarity",
            ModuleCategory::External => "external",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ModulePathError {
    #[error("Module path cannot be empty")]
    Empty,

    #[error("Invalid segment '{segment}' in module path '{path}'")]
    InvalidSegment { path: String, segment: String },
}

/// A dotted module reference such as `gaudi.genes.molecule`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The last segment, e.g. `molecule` for `gaudi.genes.molecule`.
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    pub fn category(&self) -> ModuleCategory {
        let is_under = |prefix: &str| {
            self.0
                .strip_prefix(prefix)
                .is_some_and(|rest| !rest.is_empty())
        };
        if is_under(GENES_PREFIX) {
            ModuleCategory::Gene
        } else if is_under(OBJECTIVES_PREFIX) {
            ModuleCategory::Objective
        } else if is_under(SIMILARITY_PREFIX) {
            ModuleCategory::Similarity
        } else {
            ModuleCategory::External
        }
    }
}

impl FromStr for ModulePath {
    type Err = ModulePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ModulePathError::Empty);
        }
        if let Some(bad) = s.split('.').find(|segment| !is_identifier(segment)) {
            return Err(ModulePathError::InvalidSegment {
                path: s.to_string(),
                segment: bad.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

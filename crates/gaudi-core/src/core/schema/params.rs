use crate::core::models::module::ModuleCategory;
use crate::core::utils::identifiers::{is_residue_code, parse_named_spec};
use serde_yaml::Value;
use std::fmt;

/// The shape a module parameter value must have.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    Bool,
    Int { min: Option<i64>, max: Option<i64> },
    Float { min: Option<f64>, max: Option<f64> },
    Text,
    /// One of a fixed set of words, compared case-insensitively.
    Choice(&'static [&'static str]),
    /// A filesystem path, relative paths resolved against the input file.
    Path,
    /// A three-letter amino-acid code.
    ResidueCode,
    /// The name of any gene in the document.
    GeneRef,
    /// The name of a molecule gene.
    MoleculeRef,
    /// `Molecule/<residue number>`.
    ResidueRef,
    /// `Molecule/<atom serial>`.
    AtomRef,
    /// Three numbers, `[x, y, z]`.
    Coordinates,
    ListOf(&'static ParamKind),
    Either(&'static ParamKind, &'static ParamKind),
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Bool => f.write_str("boolean"),
            ParamKind::Int { min, max } => {
                f.write_str("integer")?;
                write_bounds(f, min.map(|v| v.to_string()), max.map(|v| v.to_string()))
            }
            ParamKind::Float { min, max } => {
                f.write_str("number")?;
                write_bounds(f, min.map(|v| v.to_string()), max.map(|v| v.to_string()))
            }
            ParamKind::Text => f.write_str("text"),
            ParamKind::Choice(options) => write!(f, "one of: {}", options.join(", ")),
            ParamKind::Path => f.write_str("path"),
            ParamKind::ResidueCode => f.write_str("three-letter residue code"),
            ParamKind::GeneRef => f.write_str("gene name"),
            ParamKind::MoleculeRef => f.write_str("molecule name"),
            ParamKind::ResidueRef => f.write_str("Molecule/residue"),
            ParamKind::AtomRef => f.write_str("Molecule/atom-serial"),
            ParamKind::Coordinates => f.write_str("[x, y, z]"),
            ParamKind::ListOf(inner) => write!(f, "list of ({})", inner),
            ParamKind::Either(a, b) => write!(f, "{} or {}", a, b),
        }
    }
}

fn write_bounds(
    f: &mut fmt::Formatter<'_>,
    min: Option<String>,
    max: Option<String>,
) -> fmt::Result {
    match (min, max) {
        (Some(lo), Some(hi)) => write!(f, " in [{}, {}]", lo, hi),
        (Some(lo), None) => write!(f, " >= {}", lo),
        (None, Some(hi)) => write!(f, " <= {}", hi),
        (None, None) => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub help: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind, help: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            help,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, help: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            help,
        }
    }
}

/// Parameter schema of a built-in module.
///
/// `params` are keyword parameters (record keys, or similarity `kwargs`);
/// `positional` only applies to similarity `args`.
#[derive(Debug)]
pub struct ModuleSchema {
    pub path: &'static str,
    pub category: ModuleCategory,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
    pub positional: &'static [ParamSpec],
}

impl ModuleSchema {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Gene,
    Molecule,
}

/// A gene name mentioned by a parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub location: String,
    pub name: String,
    pub kind: ReferenceKind,
}

/// A path mentioned by a parameter value, as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMention {
    pub location: String,
    pub path: String,
}

/// Everything learned while checking one value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOutcome {
    /// `(location, message)` pairs.
    pub problems: Vec<(String, String)>,
    pub references: Vec<Reference>,
    pub paths: Vec<PathMention>,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn merge(&mut self, other: CheckOutcome) {
        self.problems.extend(other.problems);
        self.references.extend(other.references);
        self.paths.extend(other.paths);
    }

    fn problem(&mut self, location: &str, message: impl Into<String>) {
        self.problems.push((location.to_string(), message.into()));
    }

    fn reference(&mut self, location: &str, name: &str, kind: ReferenceKind) {
        self.references.push(Reference {
            location: location.to_string(),
            name: name.to_string(),
            kind,
        });
    }
}

pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn expected(kind: &ParamKind, value: &Value) -> String {
    format!("expected {}, found {}", kind, value_type(value))
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Checks `value` against `kind`, recording problems, references and paths under `location`.
pub fn check_value(kind: &ParamKind, value: &Value, location: &str, out: &mut CheckOutcome) {
    match kind {
        ParamKind::Bool => {
            if !value.is_bool() {
                out.problem(location, expected(kind, value));
            }
        }
        ParamKind::Int { min, max } => match value.as_i64() {
            Some(n) if min.is_some_and(|lo| n < lo) || max.is_some_and(|hi| n > hi) => {
                out.problem(location, format!("{} is out of range, expected {}", n, kind));
            }
            Some(_) => {}
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::Float { min, max } => match value.as_f64() {
            Some(x) if !x.is_finite() => {
                out.problem(location, format!("expected a finite {}", kind));
            }
            Some(x) if min.is_some_and(|lo| x < lo) || max.is_some_and(|hi| x > hi) => {
                out.problem(location, format!("{} is out of range, expected {}", x, kind));
            }
            Some(_) => {}
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::Text => {
            if non_empty_str(value).is_none() {
                out.problem(location, expected(kind, value));
            }
        }
        ParamKind::Choice(options) => match value.as_str() {
            Some(s) if options.iter().any(|o| o.eq_ignore_ascii_case(s.trim())) => {}
            Some(s) => out.problem(location, format!("'{}' is not {}", s, kind)),
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::Path => match non_empty_str(value) {
            Some(path) => out.paths.push(PathMention {
                location: location.to_string(),
                path: path.to_string(),
            }),
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::ResidueCode => match value.as_str() {
            Some(code) if is_residue_code(code) => {}
            Some(code) => out.problem(
                location,
                format!("'{}' is not a known three-letter residue code", code),
            ),
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::GeneRef => match non_empty_str(value) {
            Some(name) => out.reference(location, name, ReferenceKind::Gene),
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::MoleculeRef => match non_empty_str(value) {
            Some(name) => out.reference(location, name, ReferenceKind::Molecule),
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::ResidueRef | ParamKind::AtomRef => {
            let field = if matches!(kind, ParamKind::ResidueRef) {
                "residue"
            } else {
                "atom"
            };
            match value.as_str() {
                Some(s) => match parse_named_spec(s, field) {
                    Ok(spec) => out.reference(location, &spec.molecule, ReferenceKind::Molecule),
                    Err(e) => out.problem(location, e.to_string()),
                },
                None => out.problem(location, expected(kind, value)),
            }
        }
        ParamKind::Coordinates => {
            let is_point = value.as_sequence().is_some_and(|seq| {
                seq.len() == 3
                    && seq
                        .iter()
                        .all(|v| v.as_f64().is_some_and(|x| x.is_finite()))
            });
            if !is_point {
                out.problem(location, format!("expected {} with three numbers", kind));
            }
        }
        ParamKind::ListOf(inner) => match value.as_sequence() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check_value(inner, item, &format!("{}[{}]", location, i), out);
                }
            }
            None => out.problem(location, expected(kind, value)),
        },
        ParamKind::Either(first, second) => {
            for candidate in [first, second] {
                let mut attempt = CheckOutcome::default();
                check_value(candidate, value, location, &mut attempt);
                if attempt.is_clean() {
                    out.merge(attempt);
                    return;
                }
            }
            out.problem(location, expected(kind, value));
        }
    }
}

use phf::{Set, phf_set};
use std::fmt;
use thiserror::Error;

static RESIDUE_CODES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    // Protonation and disulfide variants accepted by the rotamer libraries.
    "HID", "HIE", "HIP", "HSD", "HSE", "HSP", "CYX", "ASH", "GLH", "LYN",
};

/// Returns `true` for a known three-letter amino-acid code, ignoring case and
/// surrounding whitespace.
pub fn is_residue_code(code: &str) -> bool {
    RESIDUE_CODES.contains(code.trim().to_ascii_uppercase().as_str())
}

/// Returns `true` if `segment` is a valid identifier: a letter or underscore
/// followed by letters, digits or underscores.
pub fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A `Molecule/position` reference, where the position is a residue number or
/// an atom serial inside the named molecule gene.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedSpec {
    pub molecule: String,
    pub position: i64,
}

impl fmt::Display for NamedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.molecule, self.position)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamedSpecError {
    #[error("'{0}' is not of the form 'Molecule/{1}'")]
    MissingSeparator(String, &'static str),

    #[error("Molecule name cannot be empty in '{0}'")]
    EmptyMolecule(String),

    #[error("'{position}' is not a valid {field} number in '{spec}'")]
    InvalidPosition {
        spec: String,
        field: &'static str,
        position: String,
    },
}

/// Parses `Molecule/123` into its molecule name and numeric position.
///
/// `field` names the meaning of the position (`residue`, `atom`) and is only used
/// for error messages.
pub fn parse_named_spec(spec: &str, field: &'static str) -> Result<NamedSpec, NamedSpecError> {
    let (molecule, position) = spec
        .split_once('/')
        .ok_or_else(|| NamedSpecError::MissingSeparator(spec.to_string(), field))?;
    let molecule = molecule.trim();
    if molecule.is_empty() {
        return Err(NamedSpecError::EmptyMolecule(spec.to_string()));
    }
    let position = position.trim();
    let position = position
        .parse::<i64>()
        .map_err(|_| NamedSpecError::InvalidPosition {
            spec: spec.to_string(),
            field,
            position: position.to_string(),
        })?;
    Ok(NamedSpec {
        molecule: molecule.to_string(),
        position,
    })
}

//! Parameter schemas of the built-in GaudiMM modules.
//!
//! Genes and objectives carry module-specific keys next to `name` and `module`.
//! For modules listed in the [`catalog`] those keys are checked with the
//! [`params`] kinds; anything else is only checked for basic structure.

pub mod catalog;
pub mod params;

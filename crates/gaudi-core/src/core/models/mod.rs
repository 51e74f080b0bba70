//! Typed representation of a GaudiMM input document.
//!
//! Values in these models are final: defaults have been applied and relative
//! paths resolved. Range checks live in [`crate::validation`].

pub mod defaults;
pub mod document;
pub mod ga;
pub mod module;
pub mod output;
pub mod records;
pub mod similarity;

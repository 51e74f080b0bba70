//! # Core Module
//!
//! Fundamental building blocks for describing a GaudiMM job.
//!
//! ## Architecture
//!
//! - **Input Models** ([`models`]) - Output, GA, similarity settings and the gene/objective records
//! - **File I/O** ([`io`]) - Raw documents, format detection, reading, building and writing
//! - **Module Catalog** ([`schema`]) - Parameter schemas of the built-in genes, objectives and
//!   similarity functions
//! - **Diagnostics** ([`diagnostics`]) - Located errors and warnings collected during checks
//! - **Utilities** ([`utils`]) - Identifier parsing and output naming helpers

pub mod diagnostics;
pub mod io;
pub mod models;
pub mod schema;
pub mod utils;

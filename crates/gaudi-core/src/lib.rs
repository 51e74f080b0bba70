//! # GaudiMM Input Library
//!
//! A typed model, loader and validator for the input files of GaudiMM, a genetic-algorithm
//! based platform for molecular docking and design.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that parsing, checking and the public
//! entry points stay separate.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`InputDocument`, `GaConfig`, gene and
//!   objective records), file I/O (raw documents, reader, builder, writer) and the static
//!   catalog describing the parameters of the built-in modules.
//!
//! - **[`validation`]: The Rules.** Semantic checks over a built document: value ranges, unique
//!   names, module parameters and cross references between genes and objectives. Problems are
//!   collected into a report instead of aborting on the first one.
//!
//! - **[`workflows`]: The Public API.** Read, build and validate an input file in one call, and
//!   access the annotated example input shipped with the crate.
//!
//! The library does not run the genetic algorithm, evaluate objectives or import modules. A
//! module reference is a dotted path that is checked against the catalog when it is known.

pub mod core;
pub mod validation;
pub mod workflows;

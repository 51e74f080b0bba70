//! Turns an input file plus command-line overrides into what the commands load.
//!
//! Precedence, lowest first: the input file, `--set KEY=VALUE`, dedicated flags.

pub mod builder;
pub mod models;
pub mod overrides;

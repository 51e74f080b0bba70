//! # Workflows Module
//!
//! High-level entry points that take an input file from disk (or memory) to a
//! checked [`InputDocument`](crate::core::models::document::InputDocument).
//!
//! - **Loading** ([`load`]) - read, build with defaults, then validate, reporting
//!   every problem of a file together.
//! - **Template** ([`template`]) - the annotated example input shipped with the crate.

pub mod load;
pub mod template;

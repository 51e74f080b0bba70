//! Reading, building and writing input documents.
//!
//! A file is first parsed into a [`raw::RawDocument`] where every key is
//! optional, then turned into a typed
//! [`InputDocument`](crate::core::models::document::InputDocument)
//! by the [`builder`], which applies defaults and collects structural problems.

pub mod builder;
pub mod format;
pub mod raw;
pub mod reader;
pub mod writer;

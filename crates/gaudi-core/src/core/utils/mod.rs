pub mod identifiers;
pub mod naming;

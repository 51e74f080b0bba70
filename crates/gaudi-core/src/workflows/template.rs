/// Annotated input file covering every section, using only built-in modules.
pub const EXAMPLE_INPUT: &str = include_str!("../../data/example.yaml");

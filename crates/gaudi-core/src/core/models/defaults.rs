use crate::core::utils::naming::DEFAULT_NAME_LENGTH;

pub const DEFAULT_SIMILARITY_MODULE: &str = "gaudi.similarity.rmsd";

/// Values used for every key the input file leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsConfig {
    pub output_path: String,
    pub name_length: usize,
    pub precision: usize,
    pub compress: bool,
    pub history: bool,
    pub pareto: bool,
    pub verbose: bool,
    pub check_every: usize,
    pub prompt_on_exception: bool,
    pub population: usize,
    pub generations: usize,
    pub mu: f64,
    pub lambda_: f64,
    pub mut_eta: f64,
    pub mut_pb: f64,
    pub mut_indpb: f64,
    pub cx_eta: f64,
    pub cx_pb: f64,
    pub similarity_module: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_path: ".".to_string(),
            name_length: DEFAULT_NAME_LENGTH,
            precision: 3,
            compress: true,
            history: false,
            pareto: false,
            verbose: true,
            check_every: 10,
            prompt_on_exception: true,
            population: 200,
            generations: 100,
            mu: 0.75,
            lambda_: 0.75,
            mut_eta: 5.0,
            mut_pb: 0.10,
            mut_indpb: 0.05,
            cx_eta: 5.0,
            cx_pb: 0.5,
            similarity_module: DEFAULT_SIMILARITY_MODULE.to_string(),
        }
    }
}

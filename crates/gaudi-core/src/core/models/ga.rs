use serde::Serialize;

/// Parameters of the (mu + lambda) evolutionary loop.
///
/// `mu` and `lambda_` are fractions of the population size; `mut_pb`,
/// `mut_indpb` and `cx_pb` are probabilities. `mut_eta` and `cx_eta` are the
/// crowding degrees of the polynomial mutation and simulated binary crossover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaConfig {
    pub population: usize,
    pub generations: usize,
    pub mu: f64,
    pub lambda_: f64,
    pub mut_eta: f64,
    pub mut_pb: f64,
    pub mut_indpb: f64,
    pub cx_eta: f64,
    pub cx_pb: f64,
}

impl GaConfig {
    /// Number of individuals selected as parents each generation.
    pub fn parents(&self) -> usize {
        fraction_of(self.mu, self.population)
    }

    /// Number of children produced each generation.
    pub fn offspring(&self) -> usize {
        fraction_of(self.lambda_, self.population)
    }

    /// Upper bound on individual evaluations, counting the initial population.
    ///
    /// `None` when the count does not fit in a `usize`.
    pub fn max_evaluations(&self) -> Option<usize> {
        self.generations
            .checked_mul(self.offspring())?
            .checked_add(self.population)
    }
}

fn fraction_of(fraction: f64, population: usize) -> usize {
    if !fraction.is_finite() || fraction <= 0.0 {
        return 0;
    }
    (fraction * population as f64).round() as usize
}

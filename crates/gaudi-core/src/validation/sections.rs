use crate::core::diagnostics::ValidationReport;
use crate::core::models::ga::GaConfig;
use crate::core::models::output::OutputConfig;
use crate::core::utils::naming::is_safe_file_stem;

pub const MAX_PRECISION: usize = 15;
pub const MIN_POPULATION: usize = 2;

pub fn check_output(output: &OutputConfig, report: &mut ValidationReport) {
    if !is_safe_file_stem(&output.name) {
        report.error(
            "output.name",
            format!(
                "'{}' is not usable as a file name; use a non-blank name without path separators",
                output.name
            ),
        );
    }
    if output.precision > MAX_PRECISION {
        report.error(
            "output.precision",
            format!(
                "{} decimal places requested, at most {} are meaningful",
                output.precision, MAX_PRECISION
            ),
        );
    }
}

pub fn check_ga(ga: &GaConfig, report: &mut ValidationReport) {
    if ga.population < MIN_POPULATION {
        report.error(
            "ga.population",
            format!(
                "must be at least {}, found {}",
                MIN_POPULATION, ga.population
            ),
        );
    }
    if ga.generations == 0 {
        report.warning(
            "ga.generations",
            "no generations will be evolved; only the initial population is evaluated",
        );
    }

    let mu_ok = check_fraction(ga.mu, "ga.mu", report);
    let lambda_ok = check_fraction(ga.lambda_, "ga.lambda_", report);
    if ga.population >= MIN_POPULATION {
        if mu_ok && ga.parents() == 0 {
            report.error(
                "ga.mu",
                format!("selects no parents from a population of {}", ga.population),
            );
        }
        if lambda_ok && ga.offspring() == 0 {
            report.error(
                "ga.lambda_",
                format!("produces no offspring from a population of {}", ga.population),
            );
        }
    }

    let mut_ok = check_probability(ga.mut_pb, "ga.mut_pb", report);
    check_probability(ga.mut_indpb, "ga.mut_indpb", report);
    let cx_ok = check_probability(ga.cx_pb, "ga.cx_pb", report);
    if mut_ok && cx_ok && ga.cx_pb + ga.mut_pb > 1.0 {
        report.error(
            "ga",
            format!(
                "cx_pb + mut_pb must not exceed 1, found {} + {}",
                ga.cx_pb, ga.mut_pb
            ),
        );
    }

    check_eta(ga.mut_eta, "ga.mut_eta", report);
    check_eta(ga.cx_eta, "ga.cx_eta", report);
}

/// A share of the population: `0 < x <= 1`.
fn check_fraction(value: f64, location: &str, report: &mut ValidationReport) -> bool {
    let ok = value > 0.0 && value <= 1.0;
    if !ok {
        report.error(
            location,
            format!("must be a fraction of the population in (0, 1], found {}", value),
        );
    }
    ok
}

fn check_probability(value: f64, location: &str, report: &mut ValidationReport) -> bool {
    let ok = (0.0..=1.0).contains(&value);
    if !ok {
        report.error(
            location,
            format!("must be a probability in [0, 1], found {}", value),
        );
    }
    ok
}

fn check_eta(value: f64, location: &str, report: &mut ValidationReport) {
    if !(value.is_finite() && value >= 0.0) {
        report.error(
            location,
            format!("crowding degree must be a non-negative number, found {}", value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ga() -> GaConfig {
        GaConfig {
            population: 200,
            generations: 100,
            mu: 0.75,
            lambda_: 0.75,
            mut_eta: 5.0,
            mut_pb: 0.1,
            mut_indpb: 0.05,
            cx_eta: 5.0,
            cx_pb: 0.5,
        }
    }

    fn output() -> OutputConfig {
        OutputConfig {
            path: PathBuf::from("."),
            name: "job".to_string(),
            precision: 3,
            compress: true,
            history: false,
            pareto: false,
            verbose: true,
            check_every: 10,
            prompt_on_exception: true,
        }
    }

    fn ga_report(ga: &GaConfig) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_ga(ga, &mut report);
        report
    }

    #[test]
    fn default_like_ga_settings_are_valid() {
        assert!(ga_report(&ga()).is_empty());
    }

    #[test]
    fn population_must_allow_mating() {
        let report = ga_report(&GaConfig {
            population: 1,
            ..ga()
        });
        assert!(report.mentions("ga.population"));
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn zero_generations_is_only_a_warning() {
        let report = ga_report(&GaConfig {
            generations: 0,
            ..ga()
        });
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn mu_and_lambda_must_be_fractions() {
        let report = ga_report(&GaConfig {
            mu: 0.0,
            lambda_: 1.5,
            ..ga()
        });
        assert!(report.mentions("ga.mu"));
        assert!(report.mentions("ga.lambda_"));
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn tiny_fractions_that_select_nobody_are_rejected() {
        let report = ga_report(&GaConfig {
            population: 2,
            mu: 0.1,
            ..ga()
        });
        assert_eq!(report.error_count(), 1);
        assert!(report.errors().next().unwrap().message.contains("no parents"));
    }

    #[test]
    fn probabilities_are_bounded() {
        let report = ga_report(&GaConfig {
            mut_indpb: -0.1,
            ..ga()
        });
        assert!(report.mentions("ga.mut_indpb"));
    }

    #[test]
    fn crossover_and_mutation_probabilities_share_one_budget() {
        let report = ga_report(&GaConfig {
            cx_pb: 0.7,
            mut_pb: 0.4,
            ..ga()
        });
        let error = report.errors().next().unwrap();
        assert_eq!(error.location, "ga");
        assert!(error.message.contains("cx_pb + mut_pb"));

        let exact = ga_report(&GaConfig {
            cx_pb: 0.5,
            mut_pb: 0.5,
            ..ga()
        });
        assert!(exact.is_empty());
    }

    #[test]
    fn eta_must_be_non_negative_and_finite() {
        let report = ga_report(&GaConfig {
            mut_eta: -1.0,
            cx_eta: f64::INFINITY,
            ..ga()
        });
        assert!(report.mentions("ga.mut_eta"));
        assert!(report.mentions("ga.cx_eta"));
    }

    #[test]
    fn output_name_and_precision_are_checked() {
        let mut report = ValidationReport::new();
        check_output(&output(), &mut report);
        assert!(report.is_empty());

        let bad = OutputConfig {
            name: "runs/1".to_string(),
            precision: 20,
            ..output()
        };
        check_output(&bad, &mut report);
        assert!(report.mentions("output.name"));
        assert!(report.mentions("output.precision"));
    }
}

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::response::{evaluate, ResponseError, ResponseResult, SystemParameters};

/// Damping ratios that make up the textbook side-by-side comparison.
pub const STANDARD_CASE_ZETAS: [f64; 3] = [0.1, 1.0, 2.0];

/// Selects which damping ratios get evaluated: the three standard regimes
/// together, or a single user-chosen ratio.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum DampingSweep {
    StandardCases,
    Custom { zeta: f64 },
}

impl DampingSweep {
    pub fn zeta_values(&self) -> Vec<f64> {
        match self {
            DampingSweep::StandardCases => STANDARD_CASE_ZETAS.to_vec(),
            DampingSweep::Custom { zeta } => vec![*zeta],
        }
    }
}

/// One evaluated response, tagged with the damping ratio that produced it
/// so that downstream consumers (legend, CSV columns) keep the pairing.
#[derive(Debug, Clone)]
pub struct ResponseTrace {
    pub zeta: f64,
    pub result: ResponseResult,
}

/**
 * Evaluates every damping ratio in the sweep over a shared time grid.
 * The evaluations are independent pure calls, so they run in parallel;
 * the output order still follows `zeta_values()`.
 */
pub fn evaluate_sweep(
    params: &SystemParameters,
    time_samples: &[f64],
    sweep: &DampingSweep,
) -> Result<Vec<ResponseTrace>, ResponseError> {
    sweep
        .zeta_values()
        .into_par_iter()
        .map(|zeta| {
            evaluate(zeta, params, time_samples).map(|result| ResponseTrace { zeta, result })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::DampingRegime;
    use approx::assert_relative_eq;

    fn reference_parameters() -> SystemParameters {
        SystemParameters {
            mass: 1.0,
            stiffness: 100.0,
            initial_displacement: 1.0,
            initial_velocity: 0.0,
        }
    }

    #[test]
    fn test_standard_cases_cover_all_three_regimes_in_order() {
        let time_samples = [0.0, 0.1, 0.2, 0.3];
        let traces = evaluate_sweep(
            &reference_parameters(),
            &time_samples,
            &DampingSweep::StandardCases,
        )
        .unwrap();

        assert_eq!(traces.len(), 3);
        let tol = 1e-12;
        assert_relative_eq!(traces[0].zeta, 0.1, epsilon = tol);
        assert_relative_eq!(traces[1].zeta, 1.0, epsilon = tol);
        assert_relative_eq!(traces[2].zeta, 2.0, epsilon = tol);
        assert_eq!(traces[0].result.regime, DampingRegime::Underdamped);
        assert_eq!(traces[1].result.regime, DampingRegime::CriticallyDamped);
        assert_eq!(traces[2].result.regime, DampingRegime::Overdamped);
        for trace in &traces {
            assert_eq!(trace.result.displacement.len(), time_samples.len());
        }
    }

    #[test]
    fn test_custom_sweep_is_a_single_trace() {
        let traces = evaluate_sweep(
            &reference_parameters(),
            &[0.0, 1.0],
            &DampingSweep::Custom { zeta: 0.4 },
        )
        .unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].result.regime, DampingRegime::Underdamped);
    }

    #[test]
    fn test_sweep_propagates_invalid_parameters() {
        let mut params = reference_parameters();
        params.stiffness = 0.0;
        let result = evaluate_sweep(&params, &[0.0, 1.0], &DampingSweep::StandardCases);
        assert!(result.is_err());
    }
}

//! Closed-form free-vibration response of a single-degree-of-freedom
//! mass-spring-damper system.

use approx::relative_eq;
use serde::{Deserialize, Serialize};

/// Relative tolerance used to decide that a damping ratio sits on the
/// critically damped boundary. The boundary test must be approximate:
/// selecting the oscillatory or two-exponential formula with a damping
/// ratio this close to one would divide by a near-zero quantity.
pub const CRITICAL_DAMPING_TOLERANCE: f64 = 1e-8;

/// Physical description of the oscillator. Held constant for the duration
/// of a single evaluation call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SystemParameters {
    pub mass: f64,      // [kg]
    pub stiffness: f64, // [N/m]
    pub initial_displacement: f64,
    pub initial_velocity: f64,
}

impl SystemParameters {
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingRegime {
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

impl DampingRegime {
    pub fn label(&self) -> &'static str {
        match self {
            DampingRegime::Underdamped => "Underdamped",
            DampingRegime::CriticallyDamped => "Critically Damped",
            DampingRegime::Overdamped => "Overdamped",
        }
    }
}

impl std::fmt::Display for DampingRegime {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("invalid parameter: {}", reason)]
    InvalidParameter { reason: String },
}

/// Displacement samples for one damping ratio, along with the regime that
/// was selected and the natural frequency of the system.
#[derive(Debug, Clone)]
pub struct ResponseResult {
    pub displacement: Vec<f64>,
    pub regime: DampingRegime,
    pub natural_frequency: f64,
}

/**
 * Evaluates the analytic free-vibration response of the system at every
 * entry of `time_samples`, selecting the solution branch from the damping
 * ratio. The output vector matches the length and order of the input.
 *
 * Branch order matters: the strict `zeta < 1` test runs first, then the
 * tolerance-based boundary test, so a damping ratio slightly below one
 * takes the (well-conditioned) oscillatory branch while a ratio slightly
 * above one is folded onto the boundary formula instead of dividing by
 * the near-zero root separation.
 */
pub fn evaluate(
    zeta: f64,
    params: &SystemParameters,
    time_samples: &[f64],
) -> Result<ResponseResult, ResponseError> {
    validate_inputs(zeta, params)?;

    let wn = params.natural_frequency();
    let x0 = params.initial_displacement;
    let v0 = params.initial_velocity;

    let (regime, displacement) = if zeta < 1.0 {
        let wd = wn * (1.0 - zeta * zeta).sqrt();
        let sine_scale = (v0 + zeta * wn * x0) / wd;
        let displacement = time_samples
            .iter()
            .map(|&t| {
                (-zeta * wn * t).exp() * (x0 * (wd * t).cos() + sine_scale * (wd * t).sin())
            })
            .collect();
        (DampingRegime::Underdamped, displacement)
    } else if relative_eq!(zeta, 1.0, max_relative = CRITICAL_DAMPING_TOLERANCE) {
        let displacement = time_samples
            .iter()
            .map(|&t| (x0 + (v0 + wn * x0) * t) * (-wn * t).exp())
            .collect();
        (DampingRegime::CriticallyDamped, displacement)
    } else {
        let root_offset = (zeta * zeta - 1.0).sqrt();
        let r1 = -wn * (zeta - root_offset);
        let r2 = -wn * (zeta + root_offset);
        let first_mode = (v0 - r2 * x0) / (r1 - r2);
        let second_mode = x0 - first_mode;
        let displacement = time_samples
            .iter()
            .map(|&t| first_mode * (r1 * t).exp() + second_mode * (r2 * t).exp())
            .collect();
        (DampingRegime::Overdamped, displacement)
    };

    Ok(ResponseResult {
        displacement,
        regime,
        natural_frequency: wn,
    })
}

// Note: the negated `>` comparisons also reject NaN inputs.
fn validate_inputs(zeta: f64, params: &SystemParameters) -> Result<(), ResponseError> {
    if !(params.mass > 0.0) {
        return Err(ResponseError::InvalidParameter {
            reason: format!("mass must be positive, got {}", params.mass),
        });
    }
    if !(params.stiffness > 0.0) {
        return Err(ResponseError::InvalidParameter {
            reason: format!("stiffness must be positive, got {}", params.stiffness),
        });
    }
    if !(zeta >= 0.0) {
        return Err(ResponseError::InvalidParameter {
            reason: format!("damping ratio must be non-negative, got {}", zeta),
        });
    }
    Ok(())
}

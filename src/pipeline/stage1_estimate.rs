use thiserror::Error;

use crate::model::fractions::StructureFractions;
use crate::model::params::{EstimatorParams, NonFinitePolicy};
use crate::model::reading::{EllipticityReading, Wavelength};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("invalid input: non-finite ellipticity {value} at {wavelength}")]
    InvalidInput { wavelength: Wavelength, value: f64 },
}

/// Heuristic components before renormalization, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawComponents {
    pub alpha: f64,
    pub beta: f64,
    pub turn: f64,
    pub coil: f64,
}

impl RawComponents {
    fn assembly(&self) -> [f64; 4] {
        [self.alpha, self.beta, self.turn, self.coil]
    }
}

/// Estimate fractions with the default parameters (non-finite input rejected).
pub fn estimate(e208: f64, e217: f64, e195: f64) -> Result<StructureFractions, EstimateError> {
    estimate_with(
        &EllipticityReading::new(e208, e217, e195),
        &EstimatorParams::default_v1(),
    )
}

pub fn estimate_with(
    reading: &EllipticityReading,
    params: &EstimatorParams,
) -> Result<StructureFractions, EstimateError> {
    if params.non_finite == NonFinitePolicy::Reject
        && let Some((wavelength, value)) = reading.first_non_finite()
    {
        return Err(EstimateError::InvalidInput { wavelength, value });
    }

    let v = scale_readings(&reading.values(), params.scale_epsilon);
    let raw = map_components(&v);
    let fracs = renormalize(raw.assembly(), params.renorm_epsilon);

    Ok(StructureFractions {
        alpha_helix: fracs[0],
        beta_sheet: fracs[1],
        turn: fracs[2],
        random_coil: fracs[3],
    })
}

/// Divide each reading by the sum of absolute values (plus epsilon).
pub fn scale_readings(vals: &[f64; 3], epsilon: f64) -> [f64; 3] {
    let scale = vals.iter().map(|x| x.abs()).sum::<f64>() + epsilon;
    [vals[0] / scale, vals[1] / scale, vals[2] / scale]
}

/// Turn is computed last from the other three.
pub fn map_components(v: &[f64; 3]) -> RawComponents {
    let alpha = clamp_non_negative(-v[0]);
    let beta = clamp_non_negative(-v[1]);
    let coil = clamp_non_negative(v[2]);
    let turn = clamp_non_negative(1.0 - (alpha + beta + coil));
    RawComponents {
        alpha,
        beta,
        turn,
        coil,
    }
}

pub fn renormalize(fracs: [f64; 4], epsilon: f64) -> [f64; 4] {
    let denom = fracs.iter().sum::<f64>() + epsilon;
    fracs.map(|f| f / denom)
}

/// `max(0, x)` keeping zero unless `x` is strictly greater, so NaN and -0.0 map to 0.0.
pub fn clamp_non_negative(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_estimate.rs"]
mod tests;

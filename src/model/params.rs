use serde::Serialize;

/// What to do when a reading holds NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Fail with `EstimateError::InvalidInput`.
    Reject,
    /// Run the raw arithmetic; NaN components clamp to zero and the
    /// result collapses toward turn.
    Passthrough,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimatorParams {
    /// Added to the absolute-value sum before input scaling.
    pub scale_epsilon: f64,
    /// Added to the fraction sum before the final renormalization.
    pub renorm_epsilon: f64,
    pub non_finite: NonFinitePolicy,
}

impl EstimatorParams {
    pub fn default_v1() -> Self {
        Self {
            scale_epsilon: 1e-12,
            renorm_epsilon: 1e-12,
            non_finite: NonFinitePolicy::Reject,
        }
    }

    pub fn with_policy(policy: NonFinitePolicy) -> Self {
        let mut base = Self::default_v1();
        base.non_finite = policy;
        base
    }
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self::default_v1()
    }
}

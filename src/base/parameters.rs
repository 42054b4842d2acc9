use super::{DECAY_RATE_ACTIVE, DECAY_RATE_PASSIVE};
use serde::{Deserialize, Serialize};

/// Holds parameters for the law interpolating K between the at-rest and the limiting states
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamInterpolation {
    /// Exponential decay towards the ultimate coefficients, scaled by the displacement range
    ///
    /// ```text
    /// u < 0 : K = K0 - (K0 - Ka_ult)・(1 - exp(-a_a・u/u_min))
    /// u > 0 : K = K0 + (Kp_ult - K0)・(1 - exp(-a_b・u/u_max))
    /// ```
    Decay {
        /// Decay-rate constant on the active side (> 0)
        a_a: f64,

        /// Decay-rate constant on the passive side (> 0)
        a_b: f64,
    },

    /// Ultimate coefficient multiplied by exp(u/h)
    ///
    /// ```text
    /// u < 0 : K = Ka_ult・exp(u)
    /// u > 0 : K = Kp_ult・exp(u)
    /// ```
    UltimateExponential,
}

impl ParamInterpolation {
    /// Returns the decay law with the calibrated rate constants (a_a = 3.5, a_b = 5)
    pub fn default_decay() -> Self {
        ParamInterpolation::Decay {
            a_a: DECAY_RATE_ACTIVE,
            a_b: DECAY_RATE_PASSIVE,
        }
    }

    /// Returns a short name of the law
    pub fn name(&self) -> &'static str {
        match self {
            ParamInterpolation::Decay { .. } => "decay",
            ParamInterpolation::UltimateExponential => "exponential",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

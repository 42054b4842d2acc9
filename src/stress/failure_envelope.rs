use crate::base::check_friction_angle;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Holds the Mohr-Coulomb failure envelope τ = c + σ・tan φ′
///
/// The envelope is represented by two segments symmetric about the σ-axis, from σ = 0 to
/// the normal-stress bound `sigma_n`:
///
/// ```text
///  τ ^          upper: (0,  c) → (σn,  τmax)
///    |      __--
///  c +__--
///    |-------------> σ
/// -c +‾‾--__
///    |      ‾‾--    lower: (0, -c) → (σn, -τmax)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureEnvelope {
    /// Intercept on the τ-axis (cohesion)
    pub cohesion_intercept: f64,

    /// Slope tan φ′
    pub slope: f64,

    /// Normal-stress bound of the plotted segments
    pub sigma_n: f64,

    /// Shear strength at the bound: τmax = c + σn・tan φ′
    pub shear_max: f64,
}

impl FailureEnvelope {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `cohesion` -- c′ (≥ 0)
    /// * `friction_angle` -- φ′ in degrees (0 < φ′ < 90)
    /// * `sigma_n` -- normal-stress bound (≥ 0)
    pub fn new(cohesion: f64, friction_angle: f64, sigma_n: f64) -> Result<Self, Error> {
        if !cohesion.is_finite() || cohesion < 0.0 {
            return Err(Error::InvalidParameter("cohesion must be ≥ 0.0"));
        }
        check_friction_angle(friction_angle)?;
        if !sigma_n.is_finite() || sigma_n < 0.0 {
            return Err(Error::InvalidParameter("sigma_n must be ≥ 0.0"));
        }
        let slope = f64::tan(friction_angle.to_radians());
        Ok(FailureEnvelope {
            cohesion_intercept: cohesion,
            slope,
            sigma_n,
            shear_max: cohesion + sigma_n * slope,
        })
    }

    /// Returns the shear strength at the normal stress σ
    pub fn shear_strength(&self, sigma: f64) -> f64 {
        self.cohesion_intercept + sigma * self.slope
    }

    /// Returns the end points of the upper segment
    pub fn upper(&self) -> [(f64, f64); 2] {
        [(0.0, self.cohesion_intercept), (self.sigma_n, self.shear_max)]
    }

    /// Returns the end points of the lower segment
    pub fn lower(&self) -> [(f64, f64); 2] {
        [(0.0, -self.cohesion_intercept), (self.sigma_n, -self.shear_max)]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

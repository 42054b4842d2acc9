use crate::base::check_friction_angle;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Holds the at-rest and limiting (ultimate) earth pressure coefficients
///
/// ```text
/// K0     = 1 - sin φ′                     (Jaky)
/// Ka_ult = (1 - sin φ′) / (1 + sin φ′)    (Rankine, no cohesion)
/// Kp_ult = 1 / Ka_ult
/// ```
///
/// Since `Ka_ult・Kp_ult = 1` and `0 < K0 < 1`, it follows that `Ka_ult ≤ K0 ≤ Kp_ult`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarthPressureLimits {
    /// At-rest coefficient K0
    pub k0: f64,

    /// Ultimate active coefficient
    pub k_a_ult: f64,

    /// Ultimate passive coefficient
    pub k_p_ult: f64,
}

impl EarthPressureLimits {
    /// Computes the coefficients given the friction angle φ′ in degrees
    pub fn new(friction_angle: f64) -> Result<Self, Error> {
        check_friction_angle(friction_angle)?;
        let s = f64::sin(friction_angle.to_radians());
        let k0 = 1.0 - s;
        let k_a_ult = (1.0 - s) / (1.0 + s);
        Ok(EarthPressureLimits {
            k0,
            k_a_ult,
            k_p_ult: 1.0 / k_a_ult,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

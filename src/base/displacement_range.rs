use super::check_friction_angle;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Holds the reference range of the normalized wall displacement u/h
///
/// The coefficient model needs `u_r_min < 0` (active side) and `u_r_max > 0` (passive side)
/// because the decay terms are scaled by these values. The K versus u/h curve spans twice
/// this range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplacementRange {
    /// Reference (negative) displacement ratio on the active side
    pub u_r_min: f64,

    /// Reference (positive) displacement ratio on the passive side
    pub u_r_max: f64,
}

impl DisplacementRange {
    /// Allocates a new instance
    pub fn new(u_r_min: f64, u_r_max: f64) -> Result<Self, Error> {
        if !u_r_min.is_finite() || u_r_min >= 0.0 {
            return Err(Error::InvalidParameter("u_r_min must be < 0.0"));
        }
        if !u_r_max.is_finite() || u_r_max <= 0.0 {
            return Err(Error::InvalidParameter("u_r_max must be > 0.0"));
        }
        Ok(DisplacementRange { u_r_min, u_r_max })
    }

    /// Returns the range associated with the friction angle (degrees)
    ///
    /// Denser (higher φ′) soils mobilize the limiting states at smaller displacements.
    ///
    /// ```text
    ///       φ′ < 25 : -0.008   … 0.04
    /// 25 ≤ φ′ < 30 : -0.004   … 0.02
    /// 30 ≤ φ′ < 35 : -0.002   … 0.012
    /// 35 ≤ φ′ < 40 : -0.0015  … 0.008
    /// 40 ≤ φ′      : -0.0006  … 0.004
    /// ```
    pub fn for_friction_angle(friction_angle: f64) -> Result<Self, Error> {
        check_friction_angle(friction_angle)?;
        let (u_r_min, u_r_max) = if friction_angle < 25.0 {
            (-0.008, 0.04)
        } else if friction_angle < 30.0 {
            (-0.004, 0.02)
        } else if friction_angle < 35.0 {
            (-0.002, 0.012)
        } else if friction_angle < 40.0 {
            (-0.0015, 0.008)
        } else {
            (-0.0006, 0.004)
        };
        Ok(DisplacementRange { u_r_min, u_r_max })
    }

    /// Checks again the signs (e.g., after deserialization or direct construction)
    pub fn validate(&self) -> Result<(), Error> {
        DisplacementRange::new(self.u_r_min, self.u_r_max).map(|_| ())
    }

    /// Indicates whether u/h lies within [u_r_min, u_r_max]
    pub fn contains(&self, displacement_ratio: f64) -> bool {
        displacement_ratio >= self.u_r_min && displacement_ratio <= self.u_r_max
    }

    /// Returns the (start, end) of the domain of the K versus u/h curve
    pub fn curve_domain(&self) -> (f64, f64) {
        (2.0 * self.u_r_min, 2.0 * self.u_r_max)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

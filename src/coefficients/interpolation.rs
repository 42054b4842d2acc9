use super::EarthPressureLimits;
use crate::base::{DisplacementRange, ParamInterpolation};
use crate::Error;

/// Specifies the essential function of a law mapping u/h to K
pub trait InterpolationTrait: Send + Sync {
    /// Returns the earth pressure coefficient K at the normalized displacement u/h
    ///
    /// All implementations return K0 exactly at u/h = 0.
    fn coefficient_at(&self, displacement_ratio: f64) -> f64;
}

/// Implements the exponential decay towards the ultimate coefficients
pub struct DecayLaw {
    limits: EarthPressureLimits,
    range: DisplacementRange,
    a_a: f64,
    a_b: f64,
}

/// Implements the ultimate coefficients multiplied by exp(u/h)
pub struct UltimateExponentialLaw {
    limits: EarthPressureLimits,
}

/// Holds the actual interpolation law
pub struct Interpolation {
    /// Holds the actual law implementation
    pub actual: Box<dyn InterpolationTrait>,

    /// Holds the parameters that selected the law
    pub param: ParamInterpolation,
}

impl DecayLaw {
    /// Allocates a new instance
    pub fn new(limits: EarthPressureLimits, range: DisplacementRange, a_a: f64, a_b: f64) -> Result<Self, Error> {
        range.validate()?;
        if !(a_a > 0.0) || !a_a.is_finite() {
            return Err(Error::InvalidParameter("a_a must be > 0.0"));
        }
        if !(a_b > 0.0) || !a_b.is_finite() {
            return Err(Error::InvalidParameter("a_b must be > 0.0"));
        }
        Ok(DecayLaw { limits, range, a_a, a_b })
    }
}

impl InterpolationTrait for DecayLaw {
    fn coefficient_at(&self, displacement_ratio: f64) -> f64 {
        let u = displacement_ratio;
        let EarthPressureLimits { k0, k_a_ult, k_p_ult } = self.limits;
        if u < 0.0 {
            k0 - (k0 - k_a_ult) * (1.0 - f64::exp(-self.a_a * u / self.range.u_r_min))
        } else if u > 0.0 {
            k0 + (k_p_ult - k0) * (1.0 - f64::exp(-self.a_b * u / self.range.u_r_max))
        } else {
            k0
        }
    }
}

impl UltimateExponentialLaw {
    /// Allocates a new instance
    pub fn new(limits: EarthPressureLimits) -> Self {
        UltimateExponentialLaw { limits }
    }
}

impl InterpolationTrait for UltimateExponentialLaw {
    fn coefficient_at(&self, displacement_ratio: f64) -> f64 {
        let u = displacement_ratio;
        if u < 0.0 {
            self.limits.k_a_ult * f64::exp(u)
        } else if u > 0.0 {
            self.limits.k_p_ult * f64::exp(u)
        } else {
            self.limits.k0
        }
    }
}

impl Interpolation {
    /// Allocates a new instance
    pub fn new(
        param: ParamInterpolation,
        limits: EarthPressureLimits,
        range: DisplacementRange,
    ) -> Result<Self, Error> {
        let actual: Box<dyn InterpolationTrait> = match param {
            // Exponential decay (calibrated rate constants)
            ParamInterpolation::Decay { a_a, a_b } => Box::new(DecayLaw::new(limits, range, a_a, a_b)?),

            // Ultimate coefficients times exp(u/h)
            ParamInterpolation::UltimateExponential => {
                range.validate()?;
                Box::new(UltimateExponentialLaw::new(limits))
            }
        };
        Ok(Interpolation { actual, param })
    }

    /// Returns K at u/h
    #[inline]
    pub fn coefficient_at(&self, displacement_ratio: f64) -> f64 {
        self.actual.coefficient_at(displacement_ratio)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

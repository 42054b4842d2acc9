use super::{ParamInterpolation, ENVELOPE_FACTOR, GAMMA_WATER, N_CIRCLE_POINT, N_CURVE_SAMPLE};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds configuration data for an evaluation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Law mapping u/h to K
    ///
    /// The same law drives the curve, the point estimate and the stress computations.
    pub interpolation: ParamInterpolation,

    /// Number of samples of the K versus u/h curve (≥ 2)
    pub n_curve_sample: usize,

    /// Number of points along each Mohr circle (≥ 3)
    pub n_circle_point: usize,

    /// Unit weight of water γw
    pub gamma_water: f64,

    /// Multiplier of the governing stress giving the normal-stress bound of the envelope
    pub envelope_factor: f64,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            interpolation: ParamInterpolation::default_decay(),
            n_curve_sample: N_CURVE_SAMPLE,
            n_circle_point: N_CIRCLE_POINT,
            gamma_water: GAMMA_WATER,
            envelope_factor: ENVELOPE_FACTOR,
        }
    }

    /// Sets the interpolation law
    pub fn set_interpolation(&mut self, param: ParamInterpolation) -> Result<&mut Self, Error> {
        if let ParamInterpolation::Decay { a_a, a_b } = param {
            if !(a_a > 0.0) || !a_a.is_finite() {
                return Err(Error::InvalidParameter("a_a must be > 0.0"));
            }
            if !(a_b > 0.0) || !a_b.is_finite() {
                return Err(Error::InvalidParameter("a_b must be > 0.0"));
            }
        }
        self.interpolation = param;
        Ok(self)
    }

    /// Sets the number of samples of the K versus u/h curve
    pub fn set_n_curve_sample(&mut self, value: usize) -> Result<&mut Self, Error> {
        if value < 2 {
            return Err(Error::InvalidParameter("n_curve_sample must be ≥ 2"));
        }
        self.n_curve_sample = value;
        Ok(self)
    }

    /// Sets the number of points along each Mohr circle
    pub fn set_n_circle_point(&mut self, value: usize) -> Result<&mut Self, Error> {
        if value < 3 {
            return Err(Error::InvalidParameter("n_circle_point must be ≥ 3"));
        }
        self.n_circle_point = value;
        Ok(self)
    }

    /// Sets the unit weight of water
    pub fn set_gamma_water(&mut self, value: f64) -> Result<&mut Self, Error> {
        if !(value > 0.0) || !value.is_finite() {
            return Err(Error::InvalidParameter("gamma_water must be > 0.0"));
        }
        self.gamma_water = value;
        Ok(self)
    }

    /// Sets the multiplier giving the normal-stress bound of the envelope
    pub fn set_envelope_factor(&mut self, value: f64) -> Result<&mut Self, Error> {
        if !(value > 0.0) || !value.is_finite() {
            return Err(Error::InvalidParameter("envelope_factor must be > 0.0"));
        }
        self.envelope_factor = value;
        Ok(self)
    }

    /// Checks all values (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), Error> {
        let mut copy = Config::new();
        copy.set_interpolation(self.interpolation)?
            .set_n_curve_sample(self.n_curve_sample)?
            .set_n_circle_point(self.n_circle_point)?
            .set_gamma_water(self.gamma_water)?
            .set_envelope_factor(self.envelope_factor)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "interpolation = {:?}\n", self.interpolation)?;
        write!(f, "n_curve_sample = {:?}\n", self.n_curve_sample)?;
        write!(f, "n_circle_point = {:?}\n", self.n_circle_point)?;
        write!(f, "gamma_water = {:?}\n", self.gamma_water)?;
        write!(f, "envelope_factor = {:?}\n", self.envelope_factor)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::ParamInterpolation;
    use crate::Error;

    #[test]
    fn set_methods_capture_errors() {
        let mut config = Config::new();
        assert_eq!(
            config
                .set_interpolation(ParamInterpolation::Decay { a_a: 0.0, a_b: 5.0 })
                .err(),
            Some(Error::InvalidParameter("a_a must be > 0.0"))
        );
        assert_eq!(
            config
                .set_interpolation(ParamInterpolation::Decay { a_a: 3.5, a_b: -1.0 })
                .err(),
            Some(Error::InvalidParameter("a_b must be > 0.0"))
        );
        assert_eq!(
            config.set_n_curve_sample(1).err(),
            Some(Error::InvalidParameter("n_curve_sample must be ≥ 2"))
        );
        assert_eq!(
            config.set_n_circle_point(2).err(),
            Some(Error::InvalidParameter("n_circle_point must be ≥ 3"))
        );
        assert_eq!(
            config.set_gamma_water(0.0).err(),
            Some(Error::InvalidParameter("gamma_water must be > 0.0"))
        );
        assert_eq!(
            config.set_envelope_factor(f64::NAN).err(),
            Some(Error::InvalidParameter("envelope_factor must be > 0.0"))
        );
        // nothing changed
        assert_eq!(config, Config::new());
    }

    #[test]
    fn set_methods_work() -> Result<(), Error> {
        let mut config = Config::new();
        config
            .set_interpolation(ParamInterpolation::UltimateExponential)?
            .set_n_curve_sample(11)?
            .set_n_circle_point(36)?
            .set_gamma_water(9.81)?
            .set_envelope_factor(1.5)?;
        assert_eq!(config.interpolation, ParamInterpolation::UltimateExponential);
        assert_eq!(config.n_curve_sample, 11);
        assert_eq!(config.n_circle_point, 36);
        assert_eq!(config.gamma_water, 9.81);
        assert_eq!(config.envelope_factor, 1.5);
        assert_eq!(config.validate(), Ok(()));

        let mut bad = config;
        bad.n_curve_sample = 0;
        assert_eq!(
            bad.validate().err(),
            Some(Error::InvalidParameter("n_curve_sample must be ≥ 2"))
        );
        Ok(())
    }

    #[test]
    fn display_works() {
        let config = Config::new();
        assert_eq!(
            format!("{}", config),
            "Configuration data\n\
             ==================\n\
             interpolation = Decay { a_a: 3.5, a_b: 5.0 }\n\
             n_curve_sample = 500\n\
             n_circle_point = 100\n\
             gamma_water = 10.0\n\
             envelope_factor = 1.2\n"
        );
    }
}

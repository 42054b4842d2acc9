use super::{EarthPressureLimits, Interpolation};
use crate::base::{Config, DisplacementRange, ParamInterpolation, N_CURVE_SAMPLE};
use crate::Error;
use serde::{Serialize, Serializer};

/// Holds the earth pressure coefficients at the current wall displacement
#[derive(Serialize)]
pub struct PressureCoefficients {
    /// At-rest coefficient K0
    pub k0: f64,

    /// Ultimate active coefficient
    pub k_a_ult: f64,

    /// Ultimate passive coefficient
    pub k_p_ult: f64,

    /// Active coefficient at the current u/h (equals K0 if u/h ≥ 0)
    pub k_a: f64,

    /// Passive coefficient at the current u/h (equals K0 if u/h ≤ 0)
    pub k_p: f64,

    /// Coefficient at the current u/h
    pub k: f64,

    /// Current normalized displacement u/h
    pub displacement_ratio: f64,

    /// Reference range of u/h
    pub range: DisplacementRange,

    /// Samples of K versus u/h
    pub k_curve: KCurve,
}

/// Holds the (lazy) K versus u/h curve
///
/// The samples are evenly spaced over [2・u_r_min, 2・u_r_max]. The point (0, K0) is always
/// present exactly once; it is inserted in order if the grid does not hit zero.
/// Each call to [KCurve::iter()] restarts the sequence.
pub struct KCurve {
    law: Interpolation,
    k0: f64,
    start: f64,
    end: f64,
    n_sample: usize,
    grid_hits_zero: bool,
}

/// Iterates over the (u/h, K) samples of a [KCurve]
pub struct KCurveIter<'a> {
    curve: &'a KCurve,
    index: usize,
    zero_done: bool,
}

impl KCurve {
    /// Allocates a new instance
    pub fn new(law: Interpolation, k0: f64, range: &DisplacementRange, n_sample: usize) -> Result<Self, Error> {
        range.validate()?;
        if n_sample < 2 {
            return Err(Error::InvalidParameter("n_curve_sample must be ≥ 2"));
        }
        let (start, end) = range.curve_domain();
        let mut curve = KCurve {
            law,
            k0,
            start,
            end,
            n_sample,
            grid_hits_zero: false,
        };
        curve.grid_hits_zero = (0..n_sample).any(|i| curve.grid(i) == 0.0);
        Ok(curve)
    }

    /// Returns the i-th grid abscissa
    fn grid(&self, i: usize) -> f64 {
        if i + 1 == self.n_sample {
            self.end
        } else {
            self.start + (self.end - self.start) * (i as f64) / ((self.n_sample - 1) as f64)
        }
    }

    /// Returns the number of samples, including the (0, K0) point
    pub fn len(&self) -> usize {
        if self.grid_hits_zero {
            self.n_sample
        } else {
            self.n_sample + 1
        }
    }

    /// Returns the (start, end) of the u/h domain
    pub fn domain(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Returns an iterator over the (u/h, K) samples
    pub fn iter(&self) -> KCurveIter<'_> {
        KCurveIter {
            curve: self,
            index: 0,
            zero_done: false,
        }
    }

    /// Returns the u/h and K samples as two arrays (e.g., for plotting)
    pub fn to_arrays(&self) -> (Vec<f64>, Vec<f64>) {
        self.iter().unzip()
    }
}

impl<'a> Iterator for KCurveIter<'a> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.curve.n_sample {
            return None;
        }
        let u = self.curve.grid(self.index);
        if !self.zero_done && u >= 0.0 {
            self.zero_done = true;
            if u == 0.0 {
                self.index += 1;
            }
            return Some((0.0, self.curve.k0));
        }
        self.index += 1;
        Some((u, self.curve.law.coefficient_at(u)))
    }
}

impl<'a> IntoIterator for &'a KCurve {
    type Item = (f64, f64);
    type IntoIter = KCurveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for KCurve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl PressureCoefficients {
    /// Computes the coefficients with the given law and number of curve samples
    pub fn new(
        friction_angle: f64,
        displacement_ratio: f64,
        range: &DisplacementRange,
        param: ParamInterpolation,
        n_curve_sample: usize,
    ) -> Result<Self, Error> {
        if !displacement_ratio.is_finite() {
            return Err(Error::InvalidParameter("displacement_ratio must be finite"));
        }
        let limits = EarthPressureLimits::new(friction_angle)?;
        let law = Interpolation::new(param, limits, *range)?;
        let k = law.coefficient_at(displacement_ratio);
        let k_a = if displacement_ratio < 0.0 { k } else { limits.k0 };
        let k_p = if displacement_ratio > 0.0 { k } else { limits.k0 };
        let k_curve = KCurve::new(law, limits.k0, range, n_curve_sample)?;
        log::debug!(
            "φ′ = {}, u/h = {}: K0 = {}, Ka_ult = {}, Kp_ult = {}, K = {}",
            friction_angle,
            displacement_ratio,
            limits.k0,
            limits.k_a_ult,
            limits.k_p_ult,
            k
        );
        Ok(PressureCoefficients {
            k0: limits.k0,
            k_a_ult: limits.k_a_ult,
            k_p_ult: limits.k_p_ult,
            k_a,
            k_p,
            k,
            displacement_ratio,
            range: *range,
            k_curve,
        })
    }

    /// Returns the at-rest and ultimate coefficients
    pub fn limits(&self) -> EarthPressureLimits {
        EarthPressureLimits {
            k0: self.k0,
            k_a_ult: self.k_a_ult,
            k_p_ult: self.k_p_ult,
        }
    }
}

/// Computes the earth pressure coefficients using the decay law and the default resolution
///
/// # Input
///
/// * `friction_angle` -- φ′ in degrees (0 < φ′ < 90)
/// * `displacement_ratio` -- u/h (negative: active side; positive: passive side)
/// * `u_r_min` -- reference u/h on the active side (< 0)
/// * `u_r_max` -- reference u/h on the passive side (> 0)
pub fn compute_coefficients(
    friction_angle: f64,
    displacement_ratio: f64,
    u_r_min: f64,
    u_r_max: f64,
) -> Result<PressureCoefficients, Error> {
    let range = DisplacementRange::new(u_r_min, u_r_max)?;
    PressureCoefficients::new(
        friction_angle,
        displacement_ratio,
        &range,
        ParamInterpolation::default_decay(),
        N_CURVE_SAMPLE,
    )
}

/// Computes the earth pressure coefficients using the configured law and resolution
pub fn compute_coefficients_with(
    friction_angle: f64,
    displacement_ratio: f64,
    range: &DisplacementRange,
    config: &Config,
) -> Result<PressureCoefficients, Error> {
    config.validate()?;
    PressureCoefficients::new(
        friction_angle,
        displacement_ratio,
        range,
        config.interpolation,
        config.n_curve_sample,
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

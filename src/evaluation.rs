use crate::base::{Config, DisplacementRange, SoilState};
use crate::coefficients::{compute_coefficients_with, PressureCoefficients};
use crate::stress::{compute_stress_state_with, MohrCircle, StressState};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::path::Path;

/// Defines the state of the soil behind the wall according to the sign of u/h
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallState {
    /// The wall moves away from the soil (u/h < 0)
    Active,

    /// The wall does not move (u/h = 0)
    AtRest,

    /// The wall moves into the soil (u/h > 0)
    Passive,
}

impl WallState {
    /// Classifies the normalized displacement u/h
    pub fn from_displacement_ratio(displacement_ratio: f64) -> Self {
        if displacement_ratio < 0.0 {
            WallState::Active
        } else if displacement_ratio > 0.0 {
            WallState::Passive
        } else {
            WallState::AtRest
        }
    }

    /// Returns the label of the state
    pub fn label(&self) -> &'static str {
        match self {
            WallState::Active => "Active",
            WallState::AtRest => "At-Rest",
            WallState::Passive => "Passive",
        }
    }
}

impl fmt::Display for WallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Holds the coefficient at the current wall displacement
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointEstimate {
    /// Classification of the wall movement
    pub state: WallState,

    /// Normalized displacement u/h
    pub displacement_ratio: f64,

    /// Earth pressure coefficient at u/h
    pub k: f64,
}

/// Holds the results of one evaluation
#[derive(Serialize)]
pub struct Evaluation {
    /// Coefficients and the K versus u/h curve
    pub coefficients: PressureCoefficients,

    /// Coefficient at the current u/h
    pub estimate: PointEstimate,

    /// Stresses, Mohr circles and failure envelope at depth h/2
    pub stress: StressState,
}

/// Evaluates the coefficients and the stress state
///
/// # Input
///
/// * `soil` -- the soil layer and the wall displacement
/// * `range` -- the reference range of u/h
/// * `config` -- the interpolation law and other settings
pub fn evaluate(soil: &SoilState, range: &DisplacementRange, config: &Config) -> Result<Evaluation, Error> {
    soil.validate()?;
    range.validate()?;
    config.validate()?;
    let u_r = soil.displacement_ratio;
    if !range.contains(u_r) {
        log::warn!(
            "u/h = {} is outside the reference range [{}, {}]",
            u_r,
            range.u_r_min,
            range.u_r_max
        );
    }
    let coefficients = compute_coefficients_with(soil.friction_angle, u_r, range, config)?;
    let estimate = PointEstimate {
        state: WallState::from_displacement_ratio(u_r),
        displacement_ratio: u_r,
        k: coefficients.k,
    };
    let stress = compute_stress_state_with(soil, coefficients.k0, coefficients.k_a, coefficients.k_p, config)?;
    log::debug!(
        "{} state with law '{}': K = {}",
        estimate.state,
        config.interpolation.name(),
        estimate.k
    );
    Ok(Evaluation {
        coefficients,
        estimate,
        stress,
    })
}

/// Evaluates with the range associated with the friction angle and the default configuration
pub fn evaluate_default(soil: &SoilState) -> Result<Evaluation, Error> {
    let range = DisplacementRange::for_friction_angle(soil.friction_angle)?;
    evaluate(soil, &range, &Config::new())
}

impl Evaluation {
    /// Returns the Mohr circles with their labels (at-rest first)
    pub fn circles(&self) -> Vec<(WallState, &MohrCircle)> {
        let mut res = vec![(WallState::AtRest, &self.stress.at_rest)];
        if let Some(circle) = &self.stress.active {
            res.push((WallState::Active, circle));
        }
        if let Some(circle) = &self.stress.passive {
            res.push((WallState::Passive, circle));
        }
        res
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| Error::Io("cannot create directory"))?;
        }
        let mut file = File::create(&path).map_err(|_| Error::Io("cannot create file"))?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| Error::Io("cannot write file"))?;
        Ok(())
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.coefficients;
        let s = &self.stress;
        write!(f, "{} (u/h = {})\n", self.estimate.state, self.estimate.displacement_ratio)?;
        write!(f, "K0 = {:.4}, Ka_ult = {:.4}, Kp_ult = {:.4}\n", c.k0, c.k_a_ult, c.k_p_ult)?;
        write!(f, "K = {:.4}\n", self.estimate.k)?;
        write!(f, "σv0′ = {:.3}, σh0′ = {:.3}\n", s.sigma_v0, s.sigma_h0)?;
        for (state, circle) in self.circles() {
            write!(
                f,
                "{} circle: center = {:.3}, radius = {:.3}\n",
                state, circle.center, circle.radius
            )?;
        }
        write!(
            f,
            "envelope: c = {:.3}, tan φ′ = {:.4}, σn = {:.3}, τmax = {:.3}\n",
            s.envelope.cohesion_intercept, s.envelope.slope, s.envelope.sigma_n, s.envelope.shear_max
        )?;
        write!(f, "at-rest stress tensor (compression negative) =\n{}\n", s.stress_tensor().as_matrix())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

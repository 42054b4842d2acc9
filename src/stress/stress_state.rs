use super::{FailureEnvelope, MohrCircle};
use crate::base::{Config, SoilState};
use crate::Error;
use russell_tensor::{Mandel, Tensor2};
use serde::{Deserialize, Serialize};

/// Holds the effective stress state at the reference depth h/2
///
/// Stresses follow the soil mechanics convention (compression is positive).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    /// Effective vertical stress σv0′ at depth h/2
    pub sigma_v0: f64,

    /// At-rest effective horizontal stress σh0′ = K0・σv0′
    pub sigma_h0: f64,

    /// Active effective horizontal stress (available if u/h < 0)
    pub sigma_h_a: Option<f64>,

    /// Passive effective horizontal stress (available if u/h > 0)
    pub sigma_h_p: Option<f64>,

    /// Normal-stress bound of the envelope
    pub sigma_n: f64,

    /// At-rest Mohr circle (always available)
    pub at_rest: MohrCircle,

    /// Active Mohr circle (available if u/h < 0)
    pub active: Option<MohrCircle>,

    /// Passive Mohr circle (available if u/h > 0)
    pub passive: Option<MohrCircle>,

    /// Mohr-Coulomb failure envelope
    pub envelope: FailureEnvelope,
}

/// Calculates the effective vertical stress at the reference depth h/2
///
/// ```text
/// if dw > h/2:  σv0′ = γd・(h - dw) + (γsat - γw)・(dw - h/2)
/// otherwise:    σv0′ = γd・h/2
/// ```
///
/// **Note:** Only a water table deeper than h/2 changes σv0′. A water table between the
/// surface and h/2 is ignored.
pub fn effective_vertical_stress(soil: &SoilState, gamma_water: f64) -> f64 {
    let hh = soil.wall_height;
    let dw = soil.water_table_depth;
    let z = soil.reference_depth();
    if dw > z {
        soil.dry_unit_weight * (hh - dw) + soil.submerged_unit_weight(gamma_water) * (dw - z)
    } else {
        soil.dry_unit_weight * z
    }
}

impl StressState {
    /// Computes the stress state given the earth pressure coefficients
    ///
    /// # Input
    ///
    /// * `soil` -- the soil layer and the wall displacement
    /// * `k0` -- at-rest coefficient
    /// * `k_a` -- active coefficient at the current u/h (used if u/h < 0)
    /// * `k_p` -- passive coefficient at the current u/h (used if u/h > 0)
    /// * `config` -- γw, envelope factor and circle resolution
    pub fn new(soil: &SoilState, k0: f64, k_a: f64, k_p: f64, config: &Config) -> Result<Self, Error> {
        soil.validate()?;
        config.validate()?;
        if soil.water_table_depth > soil.reference_depth() && soil.saturated_unit_weight < config.gamma_water {
            return Err(Error::InvalidParameter(
                "saturated_unit_weight must be ≥ gamma_water if the water table is below h/2",
            ));
        }
        if !k0.is_finite() || k0 <= 0.0 {
            return Err(Error::InvalidParameter("k0 must be > 0.0"));
        }
        if !k_a.is_finite() || k_a < 0.0 {
            return Err(Error::InvalidParameter("k_a must be ≥ 0.0"));
        }
        if !k_p.is_finite() || k_p < 0.0 {
            return Err(Error::InvalidParameter("k_p must be ≥ 0.0"));
        }
        let np = config.n_circle_point;
        let factor = config.envelope_factor;

        // at-rest state
        let sigma_v0 = effective_vertical_stress(soil, config.gamma_water);
        let sigma_h0 = sigma_v0 * k0;
        let at_rest = MohrCircle::new(sigma_v0, sigma_h0, np)?;

        // active or passive state
        let u_r = soil.displacement_ratio;
        let (mut sigma_h_a, mut sigma_h_p) = (None, None);
        let (mut active, mut passive) = (None, None);
        let mut sigma_n = factor * sigma_v0;
        if u_r < 0.0 {
            let sigma_h = sigma_v0 * k_a;
            active = Some(MohrCircle::new(sigma_v0, sigma_h, np)?);
            sigma_h_a = Some(sigma_h);
        } else if u_r > 0.0 {
            let sigma_h = sigma_v0 * k_p;
            passive = Some(MohrCircle::new(sigma_v0, sigma_h, np)?);
            sigma_h_p = Some(sigma_h);
            sigma_n = factor * sigma_h;
        }

        // failure envelope
        let envelope = FailureEnvelope::new(soil.cohesion, soil.friction_angle, sigma_n)?;
        log::debug!(
            "σv0′ = {}, σh0′ = {}, σha′ = {:?}, σhp′ = {:?}, σn = {}, τmax = {}",
            sigma_v0,
            sigma_h0,
            sigma_h_a,
            sigma_h_p,
            sigma_n,
            envelope.shear_max
        );
        Ok(StressState {
            sigma_v0,
            sigma_h0,
            sigma_h_a,
            sigma_h_p,
            sigma_n,
            at_rest,
            active,
            passive,
            envelope,
        })
    }

    /// Returns the circle associated with the current wall movement
    ///
    /// This is the active or passive circle, or the at-rest circle if u/h = 0.
    pub fn governing_circle(&self) -> &MohrCircle {
        match (&self.active, &self.passive) {
            (Some(circle), _) => circle,
            (None, Some(circle)) => circle,
            (None, None) => &self.at_rest,
        }
    }

    /// Returns the at-rest effective stress tensor in plane-strain
    ///
    /// **Important:** Returns values using the continuum mechanics sign convention
    ///                where compression is negative. The vertical direction is y.
    pub fn stress_tensor(&self) -> Tensor2 {
        let mut sigma = Tensor2::new(Mandel::Symmetric2D);
        sigma.sym_set(0, 0, -self.sigma_h0);
        sigma.sym_set(1, 1, -self.sigma_v0);
        sigma.sym_set(2, 2, -self.sigma_h0);
        sigma
    }
}

/// Computes the stress state with the default configuration (γw = 10, 100 circle points)
pub fn compute_stress_state(soil: &SoilState, k0: f64, k_a: f64, k_p: f64) -> Result<StressState, Error> {
    StressState::new(soil, k0, k_a, k_p, &Config::new())
}

/// Computes the stress state with the given configuration
pub fn compute_stress_state_with(
    soil: &SoilState,
    k0: f64,
    k_a: f64,
    k_p: f64,
    config: &Config,
) -> Result<StressState, Error> {
    StressState::new(soil, k0, k_a, k_p, config)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{compute_stress_state, compute_stress_state_with, effective_vertical_stress};
    use crate::base::{Config, SoilState, GAMMA_WATER};
    use crate::Error;
    use russell_lab::approx_eq;

    #[test]
    fn compute_stress_state_captures_errors() {
        let mut soil = SoilState::sample_sand(0.0);
        soil.wall_height = -1.0;
        assert_eq!(
            compute_stress_state(&soil, 0.5, 0.5, 0.5).err(),
            Some(Error::InvalidParameter("wall_height must be > 0.0"))
        );
        let soil = SoilState::sample_sand(0.0);
        assert_eq!(
            compute_stress_state(&soil, 0.0, 0.5, 0.5).err(),
            Some(Error::InvalidParameter("k0 must be > 0.0"))
        );
        assert_eq!(
            compute_stress_state(&soil, 0.5, -0.5, 0.5).err(),
            Some(Error::InvalidParameter("k_a must be ≥ 0.0"))
        );
        assert_eq!(
            compute_stress_state(&soil, 0.5, 0.5, f64::NAN).err(),
            Some(Error::InvalidParameter("k_p must be ≥ 0.0"))
        );
        let mut soil = SoilState::sample_sand(0.0);
        soil.dry_unit_weight = 5.0;
        soil.saturated_unit_weight = 8.0;
        soil.water_table_depth = 10.0;
        assert_eq!(
            compute_stress_state(&soil, 0.5, 0.5, 0.5).err(),
            Some(Error::InvalidParameter(
                "saturated_unit_weight must be ≥ gamma_water if the water table is below h/2"
            ))
        );
        soil.water_table_depth = 5.0;
        assert_eq!(compute_stress_state(&soil, 0.5, 0.5, 0.5).unwrap().sigma_v0, 25.0);
        let soil = SoilState::sample_sand(0.0);
        let mut config = Config::new();
        config.n_circle_point = 1;
        assert_eq!(
            compute_stress_state_with(&soil, 0.5, 0.5, 0.5, &config).err(),
            Some(Error::InvalidParameter("n_circle_point must be ≥ 3"))
        );
    }

    #[test]
    fn vertical_stress_ignores_shallow_water_table() {
        let mut soil = SoilState::sample_sand(0.0);
        for dw in [0.0, 1.0, 3.0, 5.0] {
            soil.water_table_depth = dw;
            assert_eq!(effective_vertical_stress(&soil, GAMMA_WATER), 90.0);
        }
    }

    #[test]
    fn vertical_stress_accounts_for_deep_water_table() {
        let mut soil = SoilState::sample_sand(0.0);
        soil.water_table_depth = 8.0;
        // 18・(10 - 8) + (19 - 10)・(8 - 5)
        approx_eq(effective_vertical_stress(&soil, GAMMA_WATER), 63.0, 1e-13);
        soil.water_table_depth = 10.0;
        // 18・0 + 9・5
        approx_eq(effective_vertical_stress(&soil, GAMMA_WATER), 45.0, 1e-13);
        // γw = 9.81
        approx_eq(effective_vertical_stress(&soil, 9.81), 9.19 * 5.0, 1e-13);
    }

    #[test]
    fn at_rest_state_works() -> Result<(), Error> {
        let soil = SoilState::sample_sand(0.0);
        let state = compute_stress_state(&soil, 0.5, 1.0 / 3.0, 3.0)?;
        assert_eq!(state.sigma_v0, 90.0);
        assert_eq!(state.sigma_h0, 45.0);
        assert_eq!(state.at_rest.center, 67.5);
        assert_eq!(state.at_rest.radius, 22.5);
        assert_eq!(state.at_rest.points.len(), 100);
        assert_eq!(state.sigma_h_a, None);
        assert_eq!(state.sigma_h_p, None);
        assert!(state.active.is_none());
        assert!(state.passive.is_none());
        approx_eq(state.sigma_n, 108.0, 1e-13);
        approx_eq(state.envelope.shear_max, 108.0 / f64::sqrt(3.0), 1e-13);
        assert_eq!(state.envelope.upper()[0], (0.0, 0.0));
        assert_eq!(state.governing_circle(), &state.at_rest);
        Ok(())
    }

    #[test]
    fn active_state_works() -> Result<(), Error> {
        let soil = SoilState::sample_sand(-0.001);
        let state = compute_stress_state(&soil, 0.5, 0.4, 2.0)?;
        let active = state.active.as_ref().unwrap();
        approx_eq(state.sigma_h_a.unwrap(), 36.0, 1e-13);
        approx_eq(active.center, 63.0, 1e-13);
        approx_eq(active.radius, 27.0, 1e-13);
        assert!(state.passive.is_none());
        approx_eq(state.sigma_n, 108.0, 1e-13);
        assert_eq!(state.governing_circle(), active);
        Ok(())
    }

    #[test]
    fn passive_state_works() -> Result<(), Error> {
        let mut soil = SoilState::sample_sand(0.002);
        soil.cohesion = 10.0;
        let state = compute_stress_state(&soil, 0.5, 0.4, 2.0)?;
        let passive = state.passive.as_ref().unwrap();
        approx_eq(state.sigma_h_p.unwrap(), 180.0, 1e-13);
        approx_eq(passive.center, 135.0, 1e-13);
        approx_eq(passive.radius, 45.0, 1e-13);
        assert!(passive.radius >= 0.0);
        assert!(state.active.is_none());
        approx_eq(state.sigma_n, 216.0, 1e-13);
        approx_eq(state.envelope.shear_max, 10.0 + 216.0 / f64::sqrt(3.0), 1e-12);
        assert_eq!(state.envelope.upper()[0], (0.0, 10.0));
        assert_eq!(state.envelope.lower()[0], (0.0, -10.0));
        Ok(())
    }

    #[test]
    fn config_changes_resolution_and_bound() -> Result<(), Error> {
        let soil = SoilState::sample_sand(0.0);
        let mut config = Config::new();
        config.set_n_circle_point(36)?.set_envelope_factor(1.5)?;
        let state = compute_stress_state_with(&soil, 0.5, 0.5, 0.5, &config)?;
        assert_eq!(state.at_rest.points.len(), 36);
        approx_eq(state.sigma_n, 135.0, 1e-13);
        Ok(())
    }

    #[test]
    fn stress_tensor_works() -> Result<(), Error> {
        let soil = SoilState::sample_sand(0.0);
        let state = compute_stress_state(&soil, 0.5, 0.5, 0.5)?;
        let sigma = state.stress_tensor();
        approx_eq(sigma.get(0, 0), -45.0, 1e-13);
        approx_eq(sigma.get(1, 1), -90.0, 1e-13);
        approx_eq(sigma.get(2, 2), -45.0, 1e-13);
        approx_eq(sigma.get(0, 1), 0.0, 1e-15);
        Ok(())
    }
}

use earthpres::*;
use russell_lab::approx_eq;

// Scenario 1: at-rest state of a dry sand
//
// φ′ = 30° ⇒ K0 = 1 - sin 30° = 0.5
// σv0′ = γd・h/2 = 18・5 = 90 and σh0′ = 45
// at-rest circle: center = 67.5, radius = 22.5
#[test]
fn test_at_rest_dry_sand() -> Result<(), Error> {
    let soil = SoilState::sample_sand(0.0);
    let coef = compute_coefficients(30.0, 0.0, -0.002, 0.01)?;
    approx_eq(coef.k0, 0.5, 1e-15);
    assert_eq!(coef.k, coef.k0);

    let state = compute_stress_state(&soil, coef.k0, coef.k_a, coef.k_p)?;
    assert_eq!(state.sigma_v0, 90.0);
    approx_eq(state.sigma_h0, 45.0, 1e-13);
    approx_eq(state.at_rest.center, 67.5, 1e-13);
    approx_eq(state.at_rest.radius, 22.5, 1e-13);
    Ok(())
}

// Scenario 2: ultimate coefficients for φ′ = 30°
#[test]
fn test_ultimate_coefficients() -> Result<(), Error> {
    let coef = compute_coefficients(30.0, 0.0, -0.002, 0.01)?;
    approx_eq(coef.k_a_ult, 1.0 / 3.0, 1e-15);
    approx_eq(coef.k_p_ult, 3.0, 1e-14);
    Ok(())
}

// Scenario 3: a water table above h/2 does not change σv0′
#[test]
fn test_shallow_water_table() -> Result<(), Error> {
    let mut soil = SoilState::sample_sand(0.0);
    soil.water_table_depth = 3.0;
    let eval = evaluate_default(&soil)?;
    assert_eq!(eval.stress.sigma_v0, soil.dry_unit_weight * soil.wall_height / 2.0);

    // a deeper water table does
    soil.water_table_depth = 7.0;
    let eval = evaluate_default(&soil)?;
    approx_eq(eval.stress.sigma_v0, 18.0 * 3.0 + 9.0 * 2.0, 1e-13);
    Ok(())
}

// Scenario 4: at rest, only the at-rest circle and the envelope are available
#[test]
fn test_at_rest_has_no_active_or_passive_circle() -> Result<(), Error> {
    let soil = SoilState::sample_sand(0.0);
    let eval = evaluate_default(&soil)?;
    assert_eq!(eval.estimate.state, WallState::AtRest);
    assert_eq!(eval.estimate.state.label(), "At-Rest");
    assert!(eval.stress.active.is_none());
    assert!(eval.stress.passive.is_none());
    assert_eq!(eval.circles().len(), 1);
    assert_eq!(eval.stress.at_rest.points.len(), 100);
    approx_eq(eval.stress.envelope.sigma_n, 1.2 * 90.0, 1e-13);
    Ok(())
}

#[test]
fn test_active_wall_movement() -> Result<(), Error> {
    let soil = SoilState::sample_sand(-0.001);
    let range = DisplacementRange::new(-0.002, 0.01)?;
    let eval = evaluate(&soil, &range, &Config::new())?;
    assert_eq!(eval.estimate.state.label(), "Active");
    let k_a = 0.5 - (0.5 - 1.0 / 3.0) * (1.0 - f64::exp(-1.75));
    approx_eq(eval.estimate.k, k_a, 1e-14);
    let active = eval.stress.active.as_ref().unwrap();
    approx_eq(active.center, (90.0 + 90.0 * k_a) / 2.0, 1e-12);
    approx_eq(active.radius, (90.0 - 90.0 * k_a) / 2.0, 1e-12);
    assert!(eval.stress.passive.is_none());
    approx_eq(eval.stress.sigma_n, 108.0, 1e-13);
    Ok(())
}

#[test]
fn test_passive_wall_movement_with_cohesion() -> Result<(), Error> {
    let mut soil = SoilState::sample_sand(0.004);
    soil.cohesion = 5.0;
    let range = DisplacementRange::new(-0.002, 0.01)?;
    let eval = evaluate(&soil, &range, &Config::new())?;
    assert_eq!(eval.estimate.state.label(), "Passive");
    let k_p = 0.5 + (3.0 - 0.5) * (1.0 - f64::exp(-2.0));
    approx_eq(eval.estimate.k, k_p, 1e-13);
    let sigma_h_p = 90.0 * k_p;
    approx_eq(eval.stress.sigma_h_p.unwrap(), sigma_h_p, 1e-11);
    let passive = eval.stress.passive.as_ref().unwrap();
    approx_eq(passive.radius, (sigma_h_p - 90.0) / 2.0, 1e-11);
    approx_eq(eval.stress.sigma_n, 1.2 * sigma_h_p, 1e-11);
    let env = eval.stress.envelope;
    approx_eq(env.shear_max, 5.0 + 1.2 * sigma_h_p / f64::sqrt(3.0), 1e-10);
    assert_eq!(env.upper()[0], (0.0, 5.0));
    assert_eq!(env.lower()[0], (0.0, -5.0));
    Ok(())
}

#[test]
fn test_errors_do_not_leak_into_next_evaluation() -> Result<(), Error> {
    let mut soil = SoilState::sample_sand(0.0);
    soil.friction_angle = 0.0;
    assert_eq!(
        evaluate_default(&soil).err(),
        Some(Error::InvalidParameter("friction_angle must satisfy 0 < φ′ < 90"))
    );
    soil.friction_angle = 30.0;
    let eval = evaluate_default(&soil)?;
    approx_eq(eval.stress.at_rest.center, 67.5, 1e-13);
    Ok(())
}

#[test]
fn test_light_saturated_soil_below_deep_water_table_is_rejected() -> Result<(), Error> {
    let mut soil = SoilState {
        wall_height: 10.0,
        friction_angle: 30.0,
        dry_unit_weight: 5.0,
        saturated_unit_weight: 8.0,
        water_table_depth: 10.0,
        cohesion: 0.0,
        displacement_ratio: 0.0,
    };
    assert_eq!(soil.validate(), Ok(()));
    let message = "saturated_unit_weight must be ≥ gamma_water if the water table is below h/2";
    assert_eq!(evaluate_default(&soil).err(), Some(Error::InvalidParameter(message)));
    soil.displacement_ratio = 0.004;
    assert_eq!(evaluate_default(&soil).err(), Some(Error::InvalidParameter(message)));

    // γsat = γw is admissible: σv0′ = γd・(h - dw) = 0
    soil.saturated_unit_weight = 10.0;
    soil.displacement_ratio = 0.0;
    let eval = evaluate_default(&soil)?;
    assert_eq!(eval.stress.sigma_v0, 0.0);
    assert_eq!(eval.stress.sigma_n, 0.0);
    assert_eq!(eval.stress.at_rest.radius, 0.0);
    Ok(())
}

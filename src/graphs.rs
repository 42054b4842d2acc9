//! Draws the K versus u/h curve and the Mohr circles with plotpy
//!
//! **Note:** Saving figures requires Python 3 and Matplotlib.

use crate::{Error, Evaluation, WallState};
use plotpy::{Curve, Plot};
use std::fs;
use std::path::Path;

/// Holds the axis windows of the two figures
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureRanges {
    /// u/h range of the coefficient figure: [4・u_r_min, 2・u_r_max]
    pub u_range: (f64, f64),

    /// K range of the coefficient figure: [0, 1.1・Kp_ult]
    pub k_range: (f64, f64),

    /// σ range of the Mohr figure: [0, σn]
    pub sigma_range: (f64, f64),

    /// τ range of the Mohr figure: [-τmax, τmax]
    pub tau_range: (f64, f64),
}

impl FigureRanges {
    /// Computes the axis windows
    pub fn new(eval: &Evaluation) -> Self {
        let c = &eval.coefficients;
        let env = &eval.stress.envelope;
        FigureRanges {
            u_range: (4.0 * c.range.u_r_min, 2.0 * c.range.u_r_max),
            k_range: (0.0, 1.1 * c.k_p_ult),
            sigma_range: (0.0, env.sigma_n),
            tau_range: (-env.shear_max, env.shear_max),
        }
    }
}

/// Returns the color associated with the wall state
pub fn state_color(state: WallState) -> &'static str {
    match state {
        WallState::Active => "blue",
        WallState::AtRest => "black",
        WallState::Passive => "green",
    }
}

/// Draws the K versus u/h curve with the current point
pub fn draw_coefficient_curve(eval: &Evaluation) -> Plot {
    let ranges = FigureRanges::new(eval);
    let (uu, kk) = eval.coefficients.k_curve.to_arrays();
    let mut curve = Curve::new();
    curve.set_label("K").set_line_color("red").set_line_width(3.0).draw(&uu, &kk);

    let state = eval.estimate.state;
    let mut point = Curve::new();
    point
        .set_label(state.label())
        .set_line_style("None")
        .set_marker_style("o")
        .set_marker_color(state_color(state))
        .set_marker_size(10.0)
        .draw(&vec![eval.estimate.displacement_ratio], &vec![eval.estimate.k]);

    let mut plot = Plot::new();
    plot.add(&curve)
        .add(&point)
        .set_range(ranges.u_range.0, ranges.u_range.1, ranges.k_range.0, ranges.k_range.1)
        .grid_and_labels("u/h", "K")
        .legend();
    plot
}

/// Draws the Mohr circles and the failure envelope at depth h/2
pub fn draw_mohr_circles(eval: &Evaluation) -> Plot {
    let ranges = FigureRanges::new(eval);
    let mut plot = Plot::new();
    for (state, circle) in eval.circles() {
        let (ss, tt) = circle.to_closed_arrays();
        let color = match state {
            WallState::AtRest => "red",
            _ => state_color(state),
        };
        let mut curve = Curve::new();
        curve.set_label(state.label()).set_line_color(color).set_line_width(2.0).draw(&ss, &tt);
        plot.add(&curve);
    }

    let env = &eval.stress.envelope;
    for (i, [a, b]) in [env.upper(), env.lower()].iter().enumerate() {
        let mut line = Curve::new();
        if i == 0 {
            line.set_label("Failure envelope");
        }
        line.set_line_color("black")
            .set_line_width(2.0)
            .draw(&vec![a.0, b.0], &vec![a.1, b.1]);
        plot.add(&line);
    }

    plot.set_title("Mohr circles of effective stresses at depth h/2")
        .set_range(
            ranges.sigma_range.0,
            ranges.sigma_range.1,
            ranges.tau_range.0,
            ranges.tau_range.1,
        )
        .set_equal_axes(true)
        .grid_and_labels("σ′ (kPa)", "τ (kPa)")
        .legend();
    plot
}

/// Saves both figures as SVG files
///
/// The files are `{out_dir}/{stem}_k_curve.svg` and `{out_dir}/{stem}_mohr.svg`.
pub fn save_figures(eval: &Evaluation, out_dir: &str, stem: &str) -> Result<(), Error> {
    fs::create_dir_all(out_dir).map_err(|_| Error::Io("cannot create directory"))?;
    let mut plot = draw_coefficient_curve(eval);
    let path = Path::new(out_dir).join(format!("{}_k_curve.svg", stem));
    plot.set_figure_size_points(600.0, 400.0)
        .save(&path)
        .map_err(|_| Error::Io("cannot save the K versus u/h figure"))?;
    let mut plot = draw_mohr_circles(eval);
    let path = Path::new(out_dir).join(format!("{}_mohr.svg", stem));
    plot.set_figure_size_points(600.0, 600.0)
        .save(&path)
        .map_err(|_| Error::Io("cannot save the Mohr circles figure"))?;
    log::info!("figures saved in {}", out_dir);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

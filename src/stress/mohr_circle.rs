use crate::Error;
use russell_lab::math::PI;
use serde::{Deserialize, Serialize};

/// Holds a Mohr circle in the (σ, τ) plane
///
/// The circle is defined by two principal stresses σa and σb:
///
/// ```text
/// center = (σa + σb) / 2
/// radius = |σa - σb| / 2
/// ```
///
/// and sampled as `σ = center + radius・cos θ`, `τ = radius・sin θ` with θ uniform in [0, 2π).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MohrCircle {
    /// Center on the σ-axis
    pub center: f64,

    /// Radius (≥ 0)
    pub radius: f64,

    /// Sampled (σ, τ) points
    pub points: Vec<(f64, f64)>,
}

impl MohrCircle {
    /// Allocates a new instance given two principal stresses
    ///
    /// # Input
    ///
    /// * `sigma_a` -- first principal stress (e.g., vertical)
    /// * `sigma_b` -- second principal stress (e.g., horizontal)
    /// * `n_point` -- number of points along the circle (≥ 3)
    pub fn new(sigma_a: f64, sigma_b: f64, n_point: usize) -> Result<Self, Error> {
        if n_point < 3 {
            return Err(Error::InvalidParameter("n_circle_point must be ≥ 3"));
        }
        let center = (sigma_a + sigma_b) / 2.0;
        let radius = f64::abs(sigma_a - sigma_b) / 2.0;
        let dtheta = 2.0 * PI / (n_point as f64);
        let points = (0..n_point)
            .map(|i| {
                let theta = (i as f64) * dtheta;
                (center + radius * f64::cos(theta), radius * f64::sin(theta))
            })
            .collect();
        Ok(MohrCircle { center, radius, points })
    }

    /// Returns the (σ, τ) point at angle θ (radians)
    pub fn point_at(&self, theta: f64) -> (f64, f64) {
        (
            self.center + self.radius * f64::cos(theta),
            self.radius * f64::sin(theta),
        )
    }

    /// Returns the major principal stress
    pub fn sigma_major(&self) -> f64 {
        self.center + self.radius
    }

    /// Returns the minor principal stress
    pub fn sigma_minor(&self) -> f64 {
        self.center - self.radius
    }

    /// Returns the σ and τ coordinates as two arrays (e.g., for plotting)
    ///
    /// The first point is repeated at the end to close the circle.
    pub fn to_closed_arrays(&self) -> (Vec<f64>, Vec<f64>) {
        let (mut ss, mut tt): (Vec<f64>, Vec<f64>) = self.points.iter().cloned().unzip();
        if let Some(&(s, t)) = self.points.first() {
            ss.push(s);
            tt.push(t);
        }
        (ss, tt)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

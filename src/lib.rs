//! Lateral earth pressure coefficients and Mohr-circle stress states behind a retaining wall
//!
//! The wall displacement is given by the normalized ratio `u_r = u/h` (negative towards the
//! active side, positive towards the passive side). The [compute_coefficients()] function maps
//! `u_r` to the earth pressure coefficient `K` and the [compute_stress_state()] function builds
//! the Mohr circles and the Mohr-Coulomb envelope at the reference depth `h/2`.
//!
//! ```
//! use earthpres::*;
//!
//! fn main() -> Result<(), Error> {
//!     let soil = SoilState::sample_sand(-0.001);
//!     let eval = evaluate_default(&soil)?;
//!     assert_eq!(eval.estimate.state.label(), "Active");
//!     assert!(eval.stress.active.is_some());
//!     Ok(())
//! }
//! ```

/// Defines the errors of this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input value lies outside its admissible domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Reading or writing a file (or figure) failed
    #[error("input/output failure: {0}")]
    Io(&'static str),
}

pub mod base;
pub mod coefficients;
mod evaluation;
pub mod graphs;
pub mod stress;
pub use crate::base::*;
pub use crate::coefficients::*;
pub use crate::evaluation::*;
pub use crate::stress::*;

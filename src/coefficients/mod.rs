//! Implements the earth pressure coefficient model K(u/h)

mod interpolation;
mod limits;
mod pressure_coefficients;
pub use crate::coefficients::interpolation::*;
pub use crate::coefficients::limits::*;
pub use crate::coefficients::pressure_coefficients::*;

//! Implements the stress engine: effective stresses at mid-depth, Mohr circles and the failure envelope

mod failure_envelope;
mod mohr_circle;
mod stress_state;
pub use crate::stress::failure_envelope::*;
pub use crate::stress::mohr_circle::*;
pub use crate::stress::stress_state::*;

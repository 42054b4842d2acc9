//! Implements the input records, parameters and configuration of an evaluation

mod config;
mod constants;
mod displacement_range;
mod parameters;
mod soil_state;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::displacement_range::*;
pub use crate::base::parameters::*;
pub use crate::base::soil_state::*;

/// Unit weight of water γw (kN/m³) adopted by the model
///
/// This is 10 instead of 9.81 on purpose; results are calibrated with this value.
pub const GAMMA_WATER: f64 = 10.0;

/// Decay-rate constant on the active side (u/h < 0)
pub const DECAY_RATE_ACTIVE: f64 = 3.5;

/// Decay-rate constant on the passive side (u/h > 0)
pub const DECAY_RATE_PASSIVE: f64 = 5.0;

/// Default number of samples of the K versus u/h curve
pub const N_CURVE_SAMPLE: usize = 500;

/// Default number of points along each Mohr circle
pub const N_CIRCLE_POINT: usize = 100;

/// Multiplier of the governing stress giving the normal-stress bound of the envelope
pub const ENVELOPE_FACTOR: f64 = 1.2;

/// Defines the directory where the output files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/earthpres/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/earthpres/test";

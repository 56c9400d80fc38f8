pub mod extrema;
pub mod split;
pub mod threshold;
pub mod transconductance;
pub mod validation;

pub use extrema::{locate, Extremum};
pub use split::{split_sweep, SplitSweep};
pub use threshold::{threshold_voltage, ThresholdEstimate};
pub use transconductance::transconductance;
pub use validation::validate_sweep;

//! Transfer-curve analysis core for electrochemical and field-effect transistors.
//!
//! A forward-and-back gate sweep is validated, split at its gate-voltage
//! maximum, and reduced to transconductance, current extrema and threshold
//! voltage, each reported for the whole sweep and for both legs.

pub mod analysis;
pub mod interface;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use analysis::{analyze, AnalysisResult, TransferCurveAnalyzer};
pub use interface::{DevicePolarity, LocatedValue, Location, Sweep};
pub use math::StableDerivative;
pub use prelude::{AnalysisConfig, TransferError, TransferResult};

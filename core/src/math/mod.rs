pub mod derivative;
pub mod stats;

pub use derivative::StableDerivative;
pub use stats::StatsHelper;

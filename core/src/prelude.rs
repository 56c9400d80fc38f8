use crate::interface::DevicePolarity;
use serde::{Deserialize, Serialize};

/// Shared configuration for a transfer-curve analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub polarity: DevicePolarity,
}

impl AnalysisConfig {
    pub fn with_polarity(polarity: DevicePolarity) -> Self {
        Self { polarity }
    }
}

/// Common error type for sweep validation and analysis.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("shape mismatch: {0}")]
    Shape(String),
    #[error("empty input: Vg and I must not be empty")]
    EmptyInput,
    #[error("NaN value in {input}")]
    NanValue { input: &'static str },
    #[error("infinite value in {input}")]
    InfiniteValue { input: &'static str },
    #[error("invalid device polarity: {0:?} (expected \"N\" or \"P\")")]
    InvalidPolarity(String),
}

pub type TransferResult<T> = Result<T, TransferError>;

use crate::prelude::TransferError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Carrier polarity of the device under test.
///
/// Selects which log-slope extremum marks the threshold voltage: the steepest
/// rise for `N`, the steepest fall for `P`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevicePolarity {
    #[default]
    #[serde(alias = "n")]
    N,
    #[serde(alias = "p")]
    P,
}

impl FromStr for DevicePolarity {
    type Err = TransferError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "n" | "N" => Ok(DevicePolarity::N),
            "p" | "P" => Ok(DevicePolarity::P),
            other => Err(TransferError::InvalidPolarity(other.to_string())),
        }
    }
}

impl fmt::Display for DevicePolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevicePolarity::N => f.write_str("N"),
            DevicePolarity::P => f.write_str("P"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_parses_case_insensitively() {
        assert_eq!("n".parse::<DevicePolarity>().unwrap(), DevicePolarity::N);
        assert_eq!("N".parse::<DevicePolarity>().unwrap(), DevicePolarity::N);
        assert_eq!(" p ".parse::<DevicePolarity>().unwrap(), DevicePolarity::P);
    }

    #[test]
    fn polarity_rejects_unknown_labels() {
        let err = "ambipolar".parse::<DevicePolarity>().unwrap_err();
        assert_eq!(err, TransferError::InvalidPolarity("ambipolar".into()));
    }
}

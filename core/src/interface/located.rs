use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a whole-sweep extremum falls relative to the turning index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Forward,
    TurningPoint,
    Reverse,
}

impl Location {
    pub fn classify(index: usize, turning: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&turning) {
            Ordering::Less => Location::Forward,
            Ordering::Equal => Location::TurningPoint,
            Ordering::Greater => Location::Reverse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Forward => "forward",
            Location::TurningPoint => "turning_point",
            Location::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar figure of merit taken over the whole sweep and over each leg.
///
/// `location` refers to the whole-sweep value only; the leg values are
/// computed on their own legs and need not coincide with `raw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocatedValue<T = f64> {
    pub raw: f64,
    pub location: Location,
    pub forward: T,
    pub reverse: T,
}

impl<T> LocatedValue<T> {
    pub fn new(raw: f64, location: Location, forward: T, reverse: T) -> Self {
        Self {
            raw,
            location,
            forward,
            reverse,
        }
    }
}

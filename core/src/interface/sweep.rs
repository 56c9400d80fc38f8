use ndarray::{s, Array1};
use serde::{Deserialize, Serialize};

/// One signal of a forward-and-back sweep, whole and split at the turning index.
///
/// `forward` is `raw[..=k]` and `reverse` is `raw[k..]`, so the turning sample
/// appears in both legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub raw: Array1<f64>,
    pub forward: Array1<f64>,
    pub reverse: Array1<f64>,
}

impl Sweep {
    pub fn new(raw: Array1<f64>, forward: Array1<f64>, reverse: Array1<f64>) -> Self {
        Self {
            raw,
            forward,
            reverse,
        }
    }

    /// Splits `raw` at `turning`. An index past the end is pinned to the last sample.
    pub fn split(raw: Array1<f64>, turning: usize) -> Self {
        if raw.is_empty() {
            return Self::new(raw, Array1::zeros(0), Array1::zeros(0));
        }
        let k = turning.min(raw.len() - 1);
        let forward = raw.slice(s![..=k]).to_owned();
        let reverse = raw.slice(s![k..]).to_owned();
        Self::new(raw, forward, reverse)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

use crate::interface::{LocatedValue, Location, Sweep};
use crate::math::stats::StatsHelper;
use crate::prelude::{TransferError, TransferResult};
use ndarray::ArrayView1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    pub fn index_of(self, values: ArrayView1<f64>) -> Option<usize> {
        match self {
            Extremum::Max => StatsHelper::argmax(values),
            Extremum::Min => StatsHelper::argmin(values),
        }
    }

    /// Extremum value, NaN for an empty signal.
    pub fn value_of(self, values: ArrayView1<f64>) -> f64 {
        self.index_of(values).map_or(f64::NAN, |idx| values[idx])
    }
}

/// Takes `extremum` over each part of `sweep` and classifies the raw hit.
pub fn locate(sweep: &Sweep, turning: usize, extremum: Extremum) -> TransferResult<LocatedValue> {
    let raw_idx = extremum
        .index_of(sweep.raw.view())
        .ok_or(TransferError::EmptyInput)?;
    Ok(LocatedValue::new(
        sweep.raw[raw_idx],
        Location::classify(raw_idx, turning),
        extremum.value_of(sweep.forward.view()),
        extremum.value_of(sweep.reverse.view()),
    ))
}

pub fn peak_transconductance(gm: &Sweep, turning: usize) -> TransferResult<LocatedValue> {
    locate(gm, turning, Extremum::Max)
}

pub fn peak_current_magnitude(current: &Sweep, turning: usize) -> TransferResult<LocatedValue> {
    locate(&magnitude(current), turning, Extremum::Max)
}

pub fn min_current_magnitude(current: &Sweep, turning: usize) -> TransferResult<LocatedValue> {
    locate(&magnitude(current), turning, Extremum::Min)
}

fn magnitude(sweep: &Sweep) -> Sweep {
    Sweep::new(
        StatsHelper::magnitude(sweep.raw.view()),
        StatsHelper::magnitude(sweep.forward.view()),
        StatsHelper::magnitude(sweep.reverse.view()),
    )
}

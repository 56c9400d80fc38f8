use crate::interface::Sweep;
use crate::math::stats::StatsHelper;
use ndarray::Array1;

/// Validated sweep split at the gate-voltage maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSweep {
    pub vg: Sweep,
    pub current: Sweep,
    pub turning_index: usize,
}

/// Index of the first maximum in the gate-voltage sweep.
pub fn turning_index(vg: &Array1<f64>) -> usize {
    StatsHelper::argmax(vg.view()).unwrap_or(0)
}

/// Splits both signals with the turning index taken from `vg`.
pub fn split_sweep(vg: Array1<f64>, current: Array1<f64>) -> SplitSweep {
    let turning_index = turning_index(&vg);
    SplitSweep {
        vg: Sweep::split(vg, turning_index),
        current: Sweep::split(current, turning_index),
        turning_index,
    }
}

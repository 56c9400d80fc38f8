use crate::interface::{DevicePolarity, LocatedValue, Location, Sweep};
use crate::math::derivative::StableDerivative;
use crate::math::stats::StatsHelper;
use crate::prelude::{TransferError, TransferResult};
use crate::processing::extrema::Extremum;
use ndarray::{Array1, ArrayView1};

/// Floor applied to |I| before taking log10.
pub const CURRENT_FLOOR: f64 = 1e-12;

/// Threshold voltage together with the log-slope curve it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdEstimate {
    pub von: LocatedValue<Option<f64>>,
    pub log_slope: Sweep,
}

/// d(log10|I|)/dVg for one leg.
pub fn log_slope(current: ArrayView1<f64>, vg: ArrayView1<f64>) -> TransferResult<Array1<f64>> {
    let logged = StatsHelper::log_magnitude(current, CURRENT_FLOOR);
    StableDerivative::differentiate(logged.view(), vg)
}

/// Von from the extremal log-slope: steepest rise for N, steepest fall for P.
pub fn threshold_voltage(
    vg: &Sweep,
    current: &Sweep,
    turning: usize,
    polarity: DevicePolarity,
) -> TransferResult<ThresholdEstimate> {
    let selector = match polarity {
        DevicePolarity::N => Extremum::Max,
        DevicePolarity::P => Extremum::Min,
    };

    let slope = Sweep::new(
        log_slope(current.raw.view(), vg.raw.view())?,
        log_slope(current.forward.view(), vg.forward.view())?,
        log_slope(current.reverse.view(), vg.reverse.view())?,
    );

    let raw_idx = selector
        .index_of(slope.raw.view())
        .ok_or(TransferError::EmptyInput)?;
    let pick = |leg_vg: &Array1<f64>, leg_slope: &Array1<f64>| {
        selector.index_of(leg_slope.view()).map(|idx| leg_vg[idx])
    };

    let von = LocatedValue::new(
        vg.raw[raw_idx],
        Location::classify(raw_idx, turning),
        pick(&vg.forward, &slope.forward),
        pick(&vg.reverse, &slope.reverse),
    );
    Ok(ThresholdEstimate {
        von,
        log_slope: slope,
    })
}

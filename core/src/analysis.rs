use crate::interface::{DevicePolarity, LocatedValue, Sweep};
use crate::prelude::{AnalysisConfig, TransferResult};
use crate::processing::{extrema, split_sweep, threshold_voltage, transconductance, validate_sweep};
use crate::telemetry::log::LogManager;
use ndarray::{ArrayView1, ArrayViewD};
use serde::Serialize;

/// Figures of merit extracted from one forward-and-back transfer sweep.
///
/// Everything is computed when the value is built; there is no way to
/// mutate or recompute it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "Vg")]
    vg: Sweep,
    #[serde(rename = "I")]
    current: Sweep,
    turning_index: usize,
    polarity: DevicePolarity,
    transconductance: Sweep,
    peak_transconductance: LocatedValue,
    peak_current_magnitude: LocatedValue,
    min_current_magnitude: LocatedValue,
    threshold_voltage: LocatedValue<Option<f64>>,
    #[serde(skip)]
    log_slope: Sweep,
}

impl AnalysisResult {
    pub fn vg(&self) -> &Sweep {
        &self.vg
    }

    pub fn current(&self) -> &Sweep {
        &self.current
    }

    /// Index of the gate-voltage maximum shared by both legs.
    pub fn turning_index(&self) -> usize {
        self.turning_index
    }

    pub fn polarity(&self) -> DevicePolarity {
        self.polarity
    }

    pub fn transconductance(&self) -> &Sweep {
        &self.transconductance
    }

    pub fn peak_transconductance(&self) -> &LocatedValue {
        &self.peak_transconductance
    }

    pub fn peak_current_magnitude(&self) -> &LocatedValue {
        &self.peak_current_magnitude
    }

    pub fn min_current_magnitude(&self) -> &LocatedValue {
        &self.min_current_magnitude
    }

    pub fn threshold_voltage(&self) -> &LocatedValue<Option<f64>> {
        &self.threshold_voltage
    }

    /// d(log10|I|)/dVg curve the threshold voltage was selected from.
    pub fn log_slope(&self) -> &Sweep {
        &self.log_slope
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Entry point that validates a raw sweep and extracts its figures of merit.
pub struct TransferCurveAnalyzer {
    config: AnalysisConfig,
    logger: LogManager,
}

impl TransferCurveAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, vg: &[f64], current: &[f64]) -> TransferResult<AnalysisResult> {
        self.analyze_view(ArrayView1::from(vg), ArrayView1::from(current))
    }

    pub fn analyze_view(
        &self,
        vg: ArrayView1<f64>,
        current: ArrayView1<f64>,
    ) -> TransferResult<AnalysisResult> {
        self.analyze_dyn(vg.into_dyn(), current.into_dyn())
    }

    /// Accepts arrays of any dimensionality; anything but 1-D is a shape error.
    pub fn analyze_dyn(
        &self,
        vg: ArrayViewD<f64>,
        current: ArrayViewD<f64>,
    ) -> TransferResult<AnalysisResult> {
        let (vg, current) = validate_sweep(vg, current).map_err(|err| {
            self.logger.warn(&format!("rejected sweep: {}", err));
            err
        })?;

        let split = split_sweep(vg, current);
        let turning = split.turning_index;
        self.logger.detail(&format!(
            "split {} samples at index {} (forward {}, reverse {})",
            split.vg.len(),
            turning,
            split.vg.forward.len(),
            split.vg.reverse.len()
        ));

        let gm = transconductance(&split.vg, &split.current)?;
        let peak_transconductance = extrema::peak_transconductance(&gm, turning)?;
        let peak_current_magnitude = extrema::peak_current_magnitude(&split.current, turning)?;
        let min_current_magnitude = extrema::min_current_magnitude(&split.current, turning)?;
        let threshold = threshold_voltage(&split.vg, &split.current, turning, self.config.polarity)?;

        self.logger.record(&format!(
            "transfer analysis ({}-type): gm_max {:.4e} ({}), |I|max {:.4e}, Von {:.4} V ({})",
            self.config.polarity,
            peak_transconductance.raw,
            peak_transconductance.location,
            peak_current_magnitude.raw,
            threshold.von.raw,
            threshold.von.location
        ));

        Ok(AnalysisResult {
            vg: split.vg,
            current: split.current,
            turning_index: turning,
            polarity: self.config.polarity,
            transconductance: gm,
            peak_transconductance,
            peak_current_magnitude,
            min_current_magnitude,
            threshold_voltage: threshold.von,
            log_slope: threshold.log_slope,
        })
    }
}

impl Default for TransferCurveAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// One-shot analysis of a (Vg, I) sweep.
pub fn analyze(
    vg: &[f64],
    current: &[f64],
    polarity: DevicePolarity,
) -> TransferResult<AnalysisResult> {
    TransferCurveAnalyzer::new(AnalysisConfig::with_polarity(polarity)).analyze(vg, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Location;
    use crate::prelude::TransferError;
    use ndarray::{array, Array2};

    const VG: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
    const I: [f64; 7] = [0.0, 1.0, 4.0, 6.0, 8.0, 23.0, 6.0];

    #[test]
    fn reference_sweep_figures_of_merit() {
        let result = analyze(&VG, &I, DevicePolarity::N).unwrap();

        assert_eq!(result.turning_index(), 3);
        assert_eq!(result.vg().forward, array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(result.vg().reverse, array![3.0, 2.0, 1.0, 0.0]);
        assert_eq!(result.transconductance().raw.len(), result.current().raw.len());

        let gm = result.peak_transconductance();
        assert_eq!(gm.raw, 17.0);
        assert_eq!(gm.location, Location::Reverse);
        assert_eq!(gm.forward, 2.5);
        assert_eq!(gm.reverse, 17.0);

        let peak = result.peak_current_magnitude();
        assert_eq!(peak.raw, 23.0);
        assert_eq!(peak.location, Location::Reverse);

        let min = result.min_current_magnitude();
        assert_eq!(min.raw, 0.0);
        assert_eq!(min.location, Location::Forward);

        assert_eq!(result.threshold_voltage().raw, 0.0);
        assert_eq!(result.threshold_voltage().forward, Some(0.0));
    }

    #[test]
    fn polarity_changes_only_threshold_voltage() {
        let n = analyze(&VG, &I, DevicePolarity::N).unwrap();
        let p = analyze(&VG, &I, DevicePolarity::P).unwrap();
        assert_eq!(n.transconductance(), p.transconductance());
        assert_eq!(n.peak_current_magnitude(), p.peak_current_magnitude());
        assert_eq!(p.threshold_voltage().raw, 2.0);
        assert_eq!(p.threshold_voltage().location, Location::Reverse);
    }

    #[test]
    fn descending_sweep_turns_at_first_sample() {
        let result = analyze(&[3.0, 2.0, 1.0, 0.0], &[9.0, 1.0, 2.0, 5.0], DevicePolarity::N)
            .unwrap();
        assert_eq!(result.turning_index(), 0);
        assert_eq!(result.peak_current_magnitude().location, Location::TurningPoint);
        assert_eq!(result.min_current_magnitude().location, Location::Reverse);
        assert_eq!(result.transconductance().forward, array![0.0]);
        assert_eq!(result.threshold_voltage().forward, Some(3.0));
    }

    #[test]
    fn single_sample_sweep_is_accepted() {
        let result = analyze(&[1.0], &[1e-6], DevicePolarity::N).unwrap();
        assert_eq!(result.transconductance().raw, array![0.0]);
        assert_eq!(result.threshold_voltage().raw, 1.0);
        assert_eq!(result.threshold_voltage().location, Location::TurningPoint);
    }

    #[test]
    fn validation_errors_surface_before_analysis() {
        assert!(matches!(
            analyze(&[0.0, 1.0], &[1.0], DevicePolarity::N),
            Err(TransferError::Shape(_))
        ));
        assert_eq!(
            analyze(&[], &[], DevicePolarity::N).unwrap_err(),
            TransferError::EmptyInput
        );
    }

    #[test]
    fn two_dimensional_input_is_a_shape_error() {
        let grid = Array2::<f64>::zeros((3, 2));
        let analyzer = TransferCurveAnalyzer::default();
        let err = analyzer
            .analyze_dyn(grid.view().into_dyn(), grid.view().into_dyn())
            .unwrap_err();
        assert!(matches!(err, TransferError::Shape(_)));
    }

    #[test]
    fn json_report_uses_sweep_field_names() {
        let result = analyze(&VG, &I, DevicePolarity::N).unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert!(json.get("Vg").is_some());
        assert!(json.get("I").is_some());
        assert_eq!(json["peak_current_magnitude"]["location"], "reverse");
        assert!(json.get("log_slope").is_none());
    }
}

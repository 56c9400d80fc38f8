use oectcore::{AnalysisResult, DevicePolarity, LocatedValue};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Flattened view of an analysis handed to stdout or a JSON consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportModel {
    pub scenario: Option<String>,
    pub polarity: DevicePolarity,
    pub samples: usize,
    pub turning_index: usize,
    pub turning_voltage: f64,
    pub transconductance: Vec<f64>,
    pub peak_transconductance: LocatedValue,
    pub peak_current_magnitude: LocatedValue,
    pub min_current_magnitude: LocatedValue,
    pub threshold_voltage: LocatedValue<Option<f64>>,
}

impl ReportModel {
    pub fn from_result(result: &AnalysisResult, scenario: Option<String>) -> Self {
        let turning_index = result.turning_index();
        Self {
            scenario,
            polarity: result.polarity(),
            samples: result.vg().len(),
            turning_index,
            turning_voltage: result.vg().raw[turning_index],
            transconductance: result.transconductance().raw.to_vec(),
            peak_transconductance: *result.peak_transconductance(),
            peak_current_magnitude: *result.peak_current_magnitude(),
            min_current_magnitude: *result.min_current_magnitude(),
            threshold_voltage: *result.threshold_voltage(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.scenario {
            let _ = writeln!(out, "scenario: {}", name);
        }
        let _ = writeln!(
            out,
            "{}-type sweep: {} samples, turning at index {} (Vg = {:.4} V)",
            self.polarity, self.samples, self.turning_index, self.turning_voltage
        );
        let _ = writeln!(out, "gm.raw: {:?}", self.transconductance);
        write_located(&mut out, "gm_max", &self.peak_transconductance);
        write_located(&mut out, "|I|max", &self.peak_current_magnitude);
        write_located(&mut out, "|I|min", &self.min_current_magnitude);

        let von = &self.threshold_voltage;
        let _ = writeln!(
            out,
            "Von: raw {:.4} V ({}), forward {}, reverse {}",
            von.raw,
            von.location,
            format_optional(von.forward),
            format_optional(von.reverse)
        );
        out
    }
}

fn write_located(out: &mut String, label: &str, value: &LocatedValue) {
    let _ = writeln!(
        out,
        "{}: raw {:.6e} ({}), forward {:.6e}, reverse {:.6e}",
        label, value.raw, value.location, value.forward, value.reverse
    );
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.4} V", v))
}

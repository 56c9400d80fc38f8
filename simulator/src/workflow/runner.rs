use crate::generator::profile::GeneratedSweep;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use oectcore::telemetry::{Metrics, MetricsRecorder};
use oectcore::{AnalysisResult, TransferCurveAnalyzer};
use std::sync::Arc;

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn execute(&self, sweep: &GeneratedSweep) -> anyhow::Result<AnalysisResult> {
        self.analyze(&sweep.vg, &sweep.current)
            .with_context(|| match sweep.scenario.as_deref() {
                Some(name) => format!("analyzing scenario {}", name),
                None => "analyzing generated sweep".to_string(),
            })
    }

    pub fn analyze(&self, vg: &[f64], current: &[f64]) -> anyhow::Result<AnalysisResult> {
        let analyzer = TransferCurveAnalyzer::new(self.config.to_analysis_config());
        match analyzer.analyze(vg, current) {
            Ok(result) => {
                self.metrics.record_analyzed();
                Ok(result)
            }
            Err(err) => {
                self.metrics.record_rejected();
                Err(err).context("running transfer analysis")
            }
        }
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics.snapshot()
    }
}

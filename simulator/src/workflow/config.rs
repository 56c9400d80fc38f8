use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use oectcore::{AnalysisConfig, DevicePolarity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub polarity: DevicePolarity,
    pub generator: GeneratorConfig,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(polarity: DevicePolarity, points: usize, seed: u64) -> Self {
        Self {
            polarity,
            generator: GeneratorConfig {
                points,
                seed,
                ..Default::default()
            },
        }
    }

    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::with_polarity(self.polarity)
    }
}

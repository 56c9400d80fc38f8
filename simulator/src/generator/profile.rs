use crate::generator::template::triangle_sweep;
use anyhow::{ensure, Context};
use oectcore::DevicePolarity;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic transfer sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Samples per leg; the full sweep has `2 * points - 1` samples.
    pub points: usize,
    pub v_start: f64,
    pub v_stop: f64,
    /// Gate voltage of the steepest log-current slope on the forward leg.
    pub von: f64,
    /// Reverse-leg shift of `von`.
    pub hysteresis: f64,
    /// Width (V) of the sigmoidal turn-on.
    pub width: f64,
    pub i_off: f64,
    pub i_on: f64,
    /// Relative multiplicative noise amplitude.
    pub noise: f64,
    pub seed: u64,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            points: 101,
            v_start: -0.6,
            v_stop: 0.6,
            von: 0.1,
            hysteresis: 0.02,
            width: 0.04,
            i_off: 1e-10,
            i_on: 1e-4,
            noise: 0.01,
            seed: 0,
            description: None,
            scenario: None,
        }
    }
}

/// Gate and drain arrays of one synthetic sweep.
#[derive(Debug, Clone)]
pub struct GeneratedSweep {
    pub vg: Vec<f64>,
    pub current: Vec<f64>,
    pub scenario: Option<String>,
}

fn validate(config: &GeneratorConfig) -> anyhow::Result<()> {
    ensure!(config.points >= 2, "generator needs at least 2 points per leg");
    ensure!(config.width > 0.0, "turn-on width must be positive");
    ensure!(
        config.i_off > 0.0 && config.i_on > config.i_off,
        "expected 0 < i_off < i_on (got {} and {})",
        config.i_off,
        config.i_on
    );
    ensure!(
        (0.0..1.0).contains(&config.noise),
        "noise must lie in [0, 1)"
    );
    Ok(())
}

fn drain_current(config: &GeneratorConfig, vg: f64, von: f64, polarity: DevicePolarity) -> f64 {
    let overdrive = match polarity {
        DevicePolarity::N => vg - von,
        DevicePolarity::P => von - vg,
    };
    let onset = 1.0 / (1.0 + (-overdrive / config.width).exp());
    let decades = config.i_on.log10() - config.i_off.log10();
    let magnitude = config.i_off * 10f64.powf(decades * onset);
    match polarity {
        DevicePolarity::N => magnitude,
        DevicePolarity::P => -magnitude,
    }
}

pub fn build_transfer_sweep_from_config(
    config: &GeneratorConfig,
    polarity: DevicePolarity,
) -> anyhow::Result<GeneratedSweep> {
    validate(config).context("invalid generator config")?;

    let vg = triangle_sweep(config.v_start, config.v_stop, config.points);
    let turning = config.points - 1;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let current = vg
        .iter()
        .enumerate()
        .map(|(idx, &v)| {
            let von = if idx > turning {
                config.von + config.hysteresis
            } else {
                config.von
            };
            let jitter = if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            };
            drain_current(config, v, von, polarity) * (1.0 + jitter)
        })
        .collect();

    Ok(GeneratedSweep {
        vg,
        current,
        scenario: config.scenario.clone(),
    })
}

#[allow(dead_code)]
pub fn build_transfer_sweep(
    points: usize,
    seed: u64,
    polarity: DevicePolarity,
) -> anyhow::Result<GeneratedSweep> {
    let config = GeneratorConfig {
        points,
        seed,
        ..Default::default()
    };
    build_transfer_sweep_from_config(&config, polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_sample_count() {
        let sweep = build_transfer_sweep(64, 0, DevicePolarity::N).unwrap();
        assert_eq!(sweep.vg.len(), 2 * 64 - 1);
        assert_eq!(sweep.current.len(), sweep.vg.len());
    }

    #[test]
    fn p_type_current_is_negative_and_falls_with_gate() {
        let config = GeneratorConfig {
            noise: 0.0,
            ..Default::default()
        };
        let sweep = build_transfer_sweep_from_config(&config, DevicePolarity::P).unwrap();
        assert!(sweep.current.iter().all(|i| *i < 0.0));
        assert!(sweep.current[0].abs() > sweep.current[config.points - 1].abs());
    }

    #[test]
    fn same_seed_reproduces_noise() {
        let a = build_transfer_sweep(32, 7, DevicePolarity::N).unwrap();
        let b = build_transfer_sweep(32, 7, DevicePolarity::N).unwrap();
        assert_eq!(a.current, b.current);
    }

    #[test]
    fn rejects_single_point_legs() {
        let config = GeneratorConfig {
            points: 1,
            ..Default::default()
        };
        assert!(build_transfer_sweep_from_config(&config, DevicePolarity::N).is_err());
    }
}

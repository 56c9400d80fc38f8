use anyhow::Context;
use clap::Parser;
use generator::profile::{build_transfer_sweep_from_config, GeneratedSweep};
use log::info;
use oectcore::DevicePolarity;
use report::ReportModel;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

const DEMO_VG: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
const DEMO_I: [f64; 7] = [0.0, 1.0, 4.0, 6.0, 8.0, 23.0, 6.0];

#[derive(Parser)]
#[command(author, version, about = "Synthetic transfer-sweep analysis driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Device polarity (N or P)
    #[arg(long, default_value = "N")]
    polarity: DevicePolarity,
    /// Samples per sweep leg
    #[arg(long, default_value_t = 101)]
    points: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Analyze the built-in seven-point reference sweep instead of generating one
    #[arg(long, default_value_t = false)]
    demo: bool,
    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.polarity, args.points, args.seed)
    };

    let runner = Runner::new(workflow_config.clone());
    let sweep = if args.demo {
        GeneratedSweep {
            vg: DEMO_VG.to_vec(),
            current: DEMO_I.to_vec(),
            scenario: Some("reference sweep".into()),
        }
    } else {
        build_transfer_sweep_from_config(&workflow_config.generator, workflow_config.polarity)?
    };

    let result = runner.execute(&sweep)?;
    let model = ReportModel::from_result(&result, sweep.scenario.clone());

    if args.json {
        let json = serde_json::to_string_pretty(&model).context("serializing report")?;
        println!("{}", json);
    } else {
        print!("{}", model.to_text());
    }

    let metrics = runner.metrics();
    info!(
        "sweeps analyzed {}, rejected {}",
        metrics.analyzed, metrics.rejected
    );
    Ok(())
}

// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use foucault::config::scenario::{ModelKind, Scenario};
use foucault::simulation::csv::{
    setup_csv_output, write_frames, write_series, FRAMES_HEADER, SERIES_HEADER,
};
use foucault::simulation::framework::{replay, run_scenario};
use foucault::simulation::load_parameters::load_scenario;

#[derive(Parser)]
#[command(name = "foucault")]
#[command(about = "Foucault pendulum trajectory simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a trajectory and write it as CSV
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Scenario YAML (defaults are used when omitted)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Model to run, overriding the scenario
    #[arg(short, long, value_enum)]
    model: Option<Model>,

    /// Gravity (m/s²)
    #[arg(long)]
    g: Option<f64>,

    /// Pendulum string length (m)
    #[arg(long)]
    length: Option<f64>,

    /// Latitude
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Output CSV for the sampled series
    #[arg(short, long, default_value = "output/trajectory.csv")]
    output: PathBuf,

    /// Optional CSV with one row per animation frame
    #[arg(long)]
    frames: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Model {
    Analytical,
    Numeric,
}

impl From<Model> for ModelKind {
    fn from(model: Model) -> Self {
        match model {
            Model::Analytical => ModelKind::Analytical,
            Model::Numeric => ModelKind::Numeric,
        }
    }
}

/// コマンドライン引数でシナリオを上書きする
fn apply_overrides(scenario: &mut Scenario, cli: &RunArgs) {
    if let Some(model) = cli.model {
        scenario.model = model.into();
    }
    match scenario.model {
        ModelKind::Analytical => {
            let params = &mut scenario.analytical;
            params.g = cli.g.unwrap_or(params.g);
            params.length = cli.length.unwrap_or(params.length);
            params.latitude = cli.latitude.unwrap_or(params.latitude);
        }
        ModelKind::Numeric => {
            let params = &mut scenario.numeric;
            params.g = cli.g.unwrap_or(params.g);
            params.length = cli.length.unwrap_or(params.length);
            params.latitude = cli.latitude.unwrap_or(params.latitude);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Commands::Run(args) => run(&args),
    }
}

fn run(cli: &RunArgs) -> Result<(), Box<dyn Error>> {
    // シナリオの読み込み
    let mut scenario = match &cli.scenario {
        Some(path) => {
            info!("シナリオを読み込みます: {:?}", path);
            load_scenario(path)?
        }
        None => Scenario::default(),
    };
    apply_overrides(&mut scenario, cli);

    // 軌跡の計算
    let output = run_scenario(&scenario)?;

    // CSV出力
    if let Some(parent) = cli.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = setup_csv_output(&cli.output, SERIES_HEADER)?;
    write_series(&mut writer, &output.series)?;
    info!(points = output.series.tail.len(), "描画点列を出力しました: {:?}", cli.output);

    if let Some(path) = &cli.frames {
        let frames = replay(&output);
        if frames.is_empty() {
            warn!("出力するフレームがありません");
        }
        let mut writer = setup_csv_output(path, FRAMES_HEADER)?;
        write_frames(&mut writer, &frames)?;
        info!(frames = frames.len(), "フレーム列を出力しました: {:?}", path);
    }

    Ok(())
}

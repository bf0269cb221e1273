//! statesim - State-space circuit simulator
//!
//! Simulates a linear circuit given as a state-space model and writes the
//! state and output trajectories as CSV or JSON.
//!
//! # Usage
//!
//! ```bash
//! statesim presets
//! statesim preset rlc --output rlc.csv
//! statesim run circuit.ssm --step 10u --duration 20m --format json
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use circuit_statespace::{
    dsl,
    error::Result,
    output, simulate, ChannelNames, Preset, SimulationRun, StateSpaceModel,
};

/// Default cap on recorded samples
const DEFAULT_MAX_SAMPLES: usize = 10_000_000;

/// State-space circuit simulator
#[derive(Parser, Debug)]
#[command(name = "statesim", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the bundled example circuits
    Presets,
    /// Simulate a bundled example circuit
    Preset {
        /// Preset identifier (rlc, rc, rl, lc)
        id: String,
        #[command(flatten)]
        options: RunOptions,
    },
    /// Simulate a model description file
    Run {
        /// Path to the model description file
        #[arg(value_name = "MODEL_FILE")]
        model_file: PathBuf,
        #[command(flatten)]
        options: RunOptions,
    },
}

#[derive(Args, Debug)]
struct RunOptions {
    /// Time step in seconds (accepts unit suffixes, e.g. 100u)
    #[arg(long, value_parser = parse_seconds)]
    step: Option<f64>,

    /// Simulated duration in seconds (accepts unit suffixes, e.g. 50m)
    #[arg(long, value_parser = parse_seconds)]
    duration: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Refuse runs that would record more samples than this
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLES)]
    max_samples: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn parse_seconds(text: &str) -> std::result::Result<f64, String> {
    dsl::parse_value(text).ok_or_else(|| format!("invalid number: {}", text))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Preset { id, options } => cmd_preset(&id, &options),
        Commands::Run {
            model_file,
            options,
        } => cmd_run(&model_file, &options),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_presets() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for preset in Preset::ALL {
        let run = preset.recommended_run()?;
        writeln!(
            stdout,
            "{:<4} {}  [h = {} s, T = {} s]",
            preset.id(),
            preset.description(),
            run.time_step(),
            run.duration()
        )?;
    }
    Ok(())
}

fn cmd_preset(id: &str, options: &RunOptions) -> Result<()> {
    let preset: Preset = id.parse()?;
    let setup = preset.setup()?;
    simulate_and_write(&setup.model, setup.run, &setup.names, options)
}

fn cmd_run(model_file: &Path, options: &RunOptions) -> Result<()> {
    let description = dsl::parse_file(model_file)?;
    simulate_and_write(&description.model, description.run, &description.names, options)
}

fn simulate_and_write(
    model: &StateSpaceModel,
    run: SimulationRun,
    names: &ChannelNames,
    options: &RunOptions,
) -> Result<()> {
    let run = match (options.step, options.duration) {
        (None, None) => run,
        (step, duration) => SimulationRun::new(
            step.unwrap_or(run.time_step()),
            duration.unwrap_or(run.duration()),
        )?,
    };
    run.check_sample_limit(options.max_samples)?;

    let result = simulate(model, &run)?;

    let mut writer: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    match options.format {
        Format::Csv => output::write_csv(&result, names, &mut writer)?,
        Format::Json => output::write_json(&result, names, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use hf_fluids::{BuiltinFluids, REFERENCE_TEMPERATURE_C, builtin_catalog, search};
use hf_project::UnitsMode;
use hf_solver::{TelemetrySample, evaluate_pipe, solve};
use report::DisplayUnits;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HydroFlow CLI - Steady-state hydraulic network analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate model file syntax and structure
    Validate {
        /// Path to the model file (.yaml, .yml or .json)
        model_path: PathBuf,
    },
    /// Solve a model and report pressures, losses and pump diagnostics
    Solve {
        /// Path to the model file (.yaml, .yml or .json)
        model_path: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Display units (defaults to the model's setting)
        #[arg(long, value_enum)]
        units: Option<UnitsArg>,
        /// Fluid temperature in °C, overriding the model
        #[arg(long)]
        temperature: Option<f64>,
    },
    /// List the built-in fluid catalog
    Fluids {
        /// Filter by id, name or alias
        query: Option<String>,
        /// Temperature in °C at which to show properties
        #[arg(long, default_value_t = REFERENCE_TEMPERATURE_C)]
        temperature: f64,
        #[arg(long, value_enum, default_value_t = UnitsArg::Si)]
        units: UnitsArg,
    },
    /// Evaluate one pipe of a model from a measured flow and temperature
    Pipe {
        /// Path to the model file (.yaml, .yml or .json)
        model_path: PathBuf,
        /// Pipe ID
        pipe_id: String,
        /// Measured flow in m³/s
        #[arg(long)]
        flow: f64,
        /// Measured fluid temperature in °C
        #[arg(long, default_value_t = REFERENCE_TEMPERATURE_C)]
        temperature: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long, value_enum)]
        units: Option<UnitsArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitsArg {
    Si,
    Us,
}

impl From<UnitsArg> for UnitsMode {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Si => UnitsMode::Si,
            UnitsArg::Us => UnitsMode::Us,
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { model_path } => cmd_validate(&model_path),
        Commands::Solve {
            model_path,
            format,
            units,
            temperature,
        } => cmd_solve(&model_path, format, units, temperature),
        Commands::Fluids {
            query,
            temperature,
            units,
        } => cmd_fluids(query.as_deref(), temperature, units),
        Commands::Pipe {
            model_path,
            pipe_id,
            flow,
            temperature,
            format,
            units,
        } => cmd_pipe(&model_path, &pipe_id, flow, temperature, format, units),
    }
}

fn cmd_validate(model_path: &Path) -> CliResult<()> {
    println!("Validating model: {}", model_path.display());
    let model = hf_project::load_model(model_path)?;
    println!(
        "✓ Model is valid ({} nodes, {} pipes, {} pump(s))",
        model.nodes.len(),
        model.pipes.len(),
        model.pumps().count()
    );
    Ok(())
}

fn cmd_solve(
    model_path: &Path,
    format: OutputFormat,
    units: Option<UnitsArg>,
    temperature: Option<f64>,
) -> CliResult<()> {
    let mut model = hf_project::load_model(model_path)?;
    if temperature.is_some() {
        model.fluid_temperature_c = temperature;
    }

    let outcome = solve(&model, &BuiltinFluids::new());
    if outcome.has_errors() {
        tracing::warn!(alerts = outcome.alerts.len(), "solution carries error alerts");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => {
            let units = DisplayUnits(units.map_or(model.units, UnitsMode::from));
            report::print_outcome(&outcome, units);
        }
    }
    Ok(())
}

fn cmd_fluids(query: Option<&str>, temperature: f64, units: UnitsArg) -> CliResult<()> {
    let entries = match query {
        Some(q) => search(q),
        None => builtin_catalog().iter().collect(),
    };
    if entries.is_empty() {
        println!("No fluids match");
        return Ok(());
    }
    report::print_catalog(&entries, temperature, DisplayUnits(units.into()))?;
    Ok(())
}

fn cmd_pipe(
    model_path: &Path,
    pipe_id: &str,
    flow: f64,
    temperature: f64,
    format: OutputFormat,
    units: Option<UnitsArg>,
) -> CliResult<()> {
    let model = hf_project::load_model(model_path)?;
    let pipe = model.pipe(pipe_id).ok_or_else(|| CliError::UnknownPipe {
        id: pipe_id.to_string(),
    })?;

    let sample = TelemetrySample {
        flow_rate_m3_s: flow,
        temperature_c: temperature,
    };
    let reading = evaluate_pipe(pipe, &model.fluid_id, sample, &BuiltinFluids::new())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reading)?),
        OutputFormat::Text => {
            let units = DisplayUnits(units.map_or(model.units, UnitsMode::from));
            report::print_reading(&reading, units);
        }
    }
    Ok(())
}

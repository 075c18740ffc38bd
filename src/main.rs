mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sweep_config::FormulationDef;
use sweep_formulation::{FILE_FORMAT_VERSION, Formulation};

/// Sweep - build parametric analysis documents for the simulation engine
#[derive(Parser)]
#[command(name = "sweep")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Log filter, e.g. "debug" (default: RUST_LOG, then "warn")
  #[arg(long, global = true)]
  log_level: Option<String>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the full analysis document
  Analysis {
    /// Path to the formulation definition (JSON)
    definition: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Build a single data point from the variables' static values
  DataPoint {
    /// Path to the formulation definition (JSON)
    definition: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.log_level.as_deref());

  match cli.command {
    Some(Commands::Analysis { definition, output }) => {
      let formulation = load_formulation(&definition)?;
      match output {
        Some(path) => formulation
          .save(&path)
          .with_context(|| format!("failed to save analysis: {}", path.display()))?,
        None => {
          let document = formulation.to_document(FILE_FORMAT_VERSION)?;
          println!("{}", serde_json::to_string_pretty(&document)?);
        }
      }
    }
    Some(Commands::DataPoint { definition, output }) => {
      let formulation = load_formulation(&definition)?;
      match output {
        Some(path) => formulation
          .save_static_data_point(&path)
          .with_context(|| format!("failed to save data point: {}", path.display()))?,
        None => {
          let document = formulation.to_static_data_point_document(FILE_FORMAT_VERSION)?;
          println!("{}", serde_json::to_string_pretty(&document)?);
        }
      }
    }
    None => {
      println!("sweep - use --help to see available commands");
    }
  }

  Ok(())
}

fn load_formulation(definition: &Path) -> Result<Formulation> {
  let content = std::fs::read_to_string(definition)
    .with_context(|| format!("failed to read definition file: {}", definition.display()))?;

  let def: FormulationDef = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse definition file: {}", definition.display()))?;

  let formulation = Formulation::from_def(def)
    .with_context(|| format!("invalid definition: {}", definition.display()))?;

  info!(
    analysis = %formulation.display_name(),
    steps = formulation.workflow().map_or(0, |w| w.items().len()),
    outputs = formulation.outputs().len(),
    "loaded formulation"
  );

  Ok(formulation)
}

//! Sweep Formulation
//!
//! This crate provides the [`Formulation`]: the root object of one parametric
//! analysis. It owns the seed model and weather references, the measure
//! workflow, the algorithm settings, and the declared outputs, and turns them
//! into the versioned document the execution engine consumes.
//!
//! # Documents
//!
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────────┐
//! │ analysis                     │      │ data_point                   │
//! │  display_name, name          │      │  set_variable_values         │
//! │  output_variables            │      │  status: "na"                │
//! │  problem                     │      │  uuid                        │
//! │   analysis_type              │      └──────────────────────────────┘
//! │   algorithm (+objectives)    │
//! │   workflow                   │
//! │  seed, weather_file          │
//! │ file_format_version          │
//! └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sweep_config::OutputFields;
//! use sweep_formulation::Formulation;
//!
//! let mut formulation = Formulation::new("Office Retrofit");
//! formulation.set_analysis_type("lhs");
//! formulation.set_seed_model_path("seeds/office.osm");
//! formulation.set_weather_file_path("weather/chicago.epw");
//! formulation.add_output(OutputFields::named("total_energy").objective(0));
//! formulation.save("analysis.json")?;
//! ```

mod document;
mod error;
mod formulation;
mod naming;
mod persist;

pub use document::inject_objective_functions;
pub use error::FormulationError;
pub use formulation::Formulation;
pub use naming::to_snake_case;

pub use sweep_algorithm::Algorithm;
pub use sweep_config::{FormulationDef, OutputDeclaration, OutputFields, SeedModel, WeatherFile};
pub use sweep_workflow::{RandomUuidGenerator, UuidGenerator, Workflow, WorkflowStep};

/// The only analysis document version currently produced.
pub const FILE_FORMAT_VERSION: u32 = 1;

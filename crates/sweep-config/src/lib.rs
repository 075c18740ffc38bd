//! Sweep Config
//!
//! This crate contains the serializable definition types for sweep. These
//! types describe the pieces of a parametric analysis before they are
//! assembled into a formulation and serialized for the execution engine.
//!
//! Definitions can be loaded from:
//! - JSON files (via CLI with `sweep analysis definition.json`)
//! - Programmatic construction through the formulation builder API
//!
//! The formulation crate takes these types, validates variable definitions
//! against their arguments, and produces the versioned analysis document.

mod definition;
mod distribution;
mod output;
mod reference;

pub use definition::{ArgumentDef, FormulationDef, StepDef, VariableDef};
pub use distribution::{Distribution, DistributionKind};
pub use output::{OutputDeclaration, OutputFields};
pub use reference::{SeedModel, WeatherFile};

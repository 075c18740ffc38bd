//! Sweep Workflow
//!
//! This crate provides the measure workflow that a formulation carries.
//! A workflow is an ordered list of steps. Each step is one configured
//! instance of a measure, with fixed argument values and zero or more
//! variables that the analysis algorithm samples.
//!
//! Key points:
//! - Step order is execution order and is preserved in the document
//! - Every variable is bound to exactly one argument of its step
//! - Variable identifiers come from an injected [`UuidGenerator`]
//! - Each variable carries a static value used for single-run data points

mod error;
mod ids;
mod manifest;
mod step;
mod variable;
mod workflow;

pub use error::WorkflowError;
pub use ids::{RandomUuidGenerator, UuidGenerator};
pub use manifest::{ManifestArgument, MeasureManifest};
pub use step::{Argument, WorkflowStep};
pub use variable::Variable;
pub use workflow::Workflow;

/// The only workflow document version currently produced.
pub const WORKFLOW_DOCUMENT_VERSION: u32 = 1;

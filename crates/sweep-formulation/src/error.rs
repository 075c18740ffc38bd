use std::path::PathBuf;

use sweep_algorithm::AlgorithmError;
use sweep_workflow::WorkflowError;

/// Errors that can occur when deriving or persisting formulation documents.
#[derive(Debug, thiserror::Error)]
pub enum FormulationError {
  /// The requested document version is not implemented.
  #[error("unsupported version {version} for {component}::{operation}")]
  UnsupportedVersion {
    version: u32,
    operation: &'static str,
    component: &'static str,
  },

  /// Writing the document to disk failed.
  #[error("failed to write {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The document could not be rendered as JSON.
  #[error("failed to serialize document: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error(transparent)]
  Workflow(#[from] WorkflowError),

  #[error(transparent)]
  Algorithm(#[from] AlgorithmError),
}

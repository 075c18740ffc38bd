use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("unsupported version {version} for Workflow::{operation}")]
  UnsupportedVersion {
    version: u32,
    operation: &'static str,
  },

  #[error("step already exists: {0}")]
  DuplicateStep(String),

  #[error("step not found: {0}")]
  StepNotFound(String),

  #[error("argument not found in step '{step}': {argument}")]
  ArgumentNotFound { step: String, argument: String },

  #[error("argument '{argument}' in step '{step}' already has a variable")]
  DuplicateVariable { step: String, argument: String },

  #[error("invalid distribution for '{argument}': {reason}")]
  InvalidDistribution { argument: String, reason: String },

  #[error("variable for '{argument}' has no static value")]
  MissingStaticValue { argument: String },

  #[error("failed to read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid measure manifest {path}: {source}")]
  InvalidManifest {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to serialize workflow: {0}")]
  Serialization(#[from] serde_json::Error),
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::WORKFLOW_DOCUMENT_VERSION;
use crate::error::WorkflowError;
use crate::manifest::MeasureManifest;
use crate::step::WorkflowStep;

/// An ordered list of measure steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
  items: Vec<WorkflowStep>,
}

impl Workflow {
  pub fn new() -> Self {
    Self::default()
  }

  /// Steps in execution order.
  pub fn items(&self) -> &[WorkflowStep] {
    &self.items
  }

  pub fn items_mut(&mut self) -> &mut [WorkflowStep] {
    &mut self.items
  }

  /// Append a step. Step names must be unique within the workflow.
  pub fn add_step(&mut self, step: WorkflowStep) -> Result<&mut WorkflowStep, WorkflowError> {
    if self.find_step(&step.name).is_some() {
      return Err(WorkflowError::DuplicateStep(step.name));
    }

    debug!(step = %step.name, index = self.items.len(), "workflow step added");
    self.items.push(step);
    let last = self.items.len() - 1;
    Ok(&mut self.items[last])
  }

  /// Load a measure from its directory and append it as a new step whose
  /// arguments start at their defaults. Without a `display_name` the step
  /// takes the manifest's display name, then its measure name.
  pub fn add_measure_from_path(
    &mut self,
    instance_name: &str,
    display_name: Option<&str>,
    measure_dir: impl AsRef<Path>,
  ) -> Result<&mut WorkflowStep, WorkflowError> {
    let measure_dir = measure_dir.as_ref();
    let manifest = MeasureManifest::read(measure_dir)?;

    let display_name = display_name.unwrap_or_else(|| manifest.step_display_name());
    let mut step = WorkflowStep::new(instance_name, display_name, manifest.measure_type.clone());
    step.measure_definition_class_name = manifest.class_name.clone();
    step.measure_definition_directory = Some(measure_dir.display().to_string());
    for argument in manifest.arguments() {
      step.add_argument(argument);
    }

    self.add_step(step)
  }

  pub fn find_step(&self, name: &str) -> Option<&WorkflowStep> {
    self.items.iter().find(|s| s.name == name)
  }

  pub fn find_step_mut(&mut self, name: &str) -> Option<&mut WorkflowStep> {
    self.items.iter_mut().find(|s| s.name == name)
  }

  /// Remove every step.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Produce the workflow document: one object per step, in order, each
  /// tagged with its `workflow_index`.
  pub fn to_document(&self, version: u32) -> Result<Value, WorkflowError> {
    if version != WORKFLOW_DOCUMENT_VERSION {
      return Err(WorkflowError::UnsupportedVersion {
        version,
        operation: "to_document",
      });
    }

    let mut steps = Vec::with_capacity(self.items.len());
    for (index, step) in self.items.iter().enumerate() {
      let mut value = serde_json::to_value(step)?;
      if let Value::Object(fields) = &mut value {
        fields.insert("workflow_index".to_string(), Value::from(index));
      }
      steps.push(value);
    }

    Ok(Value::Array(steps))
  }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sweep_config::{Distribution, StepDef};
use tracing::debug;

use crate::error::WorkflowError;
use crate::ids::UuidGenerator;
use crate::variable::Variable;

/// A measure argument with its fixed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
  pub name: String,
  pub display_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value_type: Option<String>,
  pub default_value: Value,
  pub value: Value,
}

impl Argument {
  pub fn new(name: impl Into<String>, value: Value) -> Self {
    let name = name.into();
    Self {
      display_name: name.clone(),
      name,
      value_type: None,
      default_value: value.clone(),
      value,
    }
  }
}

/// One configured instance of a measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
  pub name: String,
  pub display_name: String,
  pub measure_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub measure_definition_class_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub measure_definition_directory: Option<String>,
  arguments: Vec<Argument>,
  variables: Vec<Variable>,
}

impl WorkflowStep {
  pub fn new(
    name: impl Into<String>,
    display_name: impl Into<String>,
    measure_type: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      display_name: display_name.into(),
      measure_type: measure_type.into(),
      measure_definition_class_name: None,
      measure_definition_directory: None,
      arguments: Vec::new(),
      variables: Vec::new(),
    }
  }

  /// Build a step from its definition. Variables get the same checks as
  /// [`WorkflowStep::make_variable`].
  pub fn from_def(def: StepDef, ids: &dyn UuidGenerator) -> Result<Self, WorkflowError> {
    let mut step = Self::new(def.name, def.display_name, def.measure_type);
    step.measure_definition_class_name = def.measure_definition_class_name;
    step.measure_definition_directory = def.measure_definition_directory;

    for arg in def.arguments {
      step.add_argument(Argument {
        display_name: arg.display_name.unwrap_or_else(|| arg.name.clone()),
        value: arg.value.unwrap_or_else(|| arg.default_value.clone()),
        name: arg.name,
        value_type: arg.value_type,
        default_value: arg.default_value,
      });
    }

    for var in def.variables {
      let mut variable = Variable::new(
        var.argument,
        var.display_name,
        var.distribution,
        var.static_value,
        ids,
      )?;
      if let Some(short) = var.display_name_short {
        variable = variable.with_display_name_short(short);
      }
      if let Some(units) = var.units {
        variable = variable.with_units(units);
      }
      step.add_variable(variable)?;
    }

    Ok(step)
  }

  pub fn arguments(&self) -> &[Argument] {
    &self.arguments
  }

  pub fn variables(&self) -> &[Variable] {
    &self.variables
  }

  pub fn argument(&self, name: &str) -> Option<&Argument> {
    self.arguments.iter().find(|a| a.name == name)
  }

  /// Add an argument, replacing any existing argument with the same name.
  pub fn add_argument(&mut self, argument: Argument) {
    match self.arguments.iter_mut().find(|a| a.name == argument.name) {
      Some(existing) => *existing = argument,
      None => self.arguments.push(argument),
    }
  }

  /// Set the fixed value of an existing argument.
  pub fn argument_value(&mut self, name: &str, value: Value) -> Result<(), WorkflowError> {
    let step = self.name.clone();
    let argument = self
      .arguments
      .iter_mut()
      .find(|a| a.name == name)
      .ok_or_else(|| WorkflowError::ArgumentNotFound {
        step,
        argument: name.to_string(),
      })?;
    argument.value = value;
    Ok(())
  }

  /// Turn an argument into a sampled variable.
  pub fn make_variable(
    &mut self,
    argument: &str,
    display_name: &str,
    distribution: Distribution,
    static_value: Value,
    ids: &dyn UuidGenerator,
  ) -> Result<&Variable, WorkflowError> {
    let variable = Variable::new(argument, display_name, distribution, static_value, ids)?;
    self.add_variable(variable)
  }

  /// Attach an already-built variable; its argument must exist and must not
  /// be driven by another variable.
  pub fn add_variable(&mut self, variable: Variable) -> Result<&Variable, WorkflowError> {
    if self.argument(&variable.argument).is_none() {
      return Err(WorkflowError::ArgumentNotFound {
        step: self.name.clone(),
        argument: variable.argument,
      });
    }
    if self.variables.iter().any(|v| v.argument == variable.argument) {
      return Err(WorkflowError::DuplicateVariable {
        step: self.name.clone(),
        argument: variable.argument,
      });
    }

    debug!(
      step = %self.name,
      argument = %variable.argument,
      uuid = %variable.uuid,
      "variable added"
    );
    self.variables.push(variable);
    Ok(&self.variables[self.variables.len() - 1])
  }
}

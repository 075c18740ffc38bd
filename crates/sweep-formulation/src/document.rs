use serde_json::{Map, Value, json};
use sweep_workflow::Workflow;
use tracing::warn;

use crate::FILE_FORMAT_VERSION;
use crate::error::FormulationError;
use crate::formulation::Formulation;
use crate::naming::to_snake_case;

const COMPONENT: &str = "Formulation";

impl Formulation {
  /// Assemble the analysis document.
  ///
  /// After the document is built, the names of all objective-function
  /// outputs are injected into `problem.algorithm.objective_functions`.
  pub fn to_document(&self, version: u32) -> Result<Value, FormulationError> {
    check_version(version, "to_document")?;

    let workflow = match self.workflow() {
      Some(workflow) => workflow.to_document(version)?,
      None => Workflow::default().to_document(version)?,
    };

    let mut document = json!({
      "analysis": {
        "display_name": self.display_name(),
        "name": to_snake_case(self.display_name()),
        "output_variables": self.outputs(),
        "problem": {
          "analysis_type": self.analysis_type(),
          "algorithm": self.algorithm().to_document(version)?,
          "workflow": workflow,
        },
        "seed": self.seed_model(),
        "weather_file": self.weather_file(),
        "file_format_version": version,
      }
    });

    if !inject_objective_functions(&mut document, self.objective_function_names()) {
      warn!(
        analysis = %self.display_name(),
        "no algorithm document present, objective functions dropped"
      );
    }

    Ok(document)
  }

  /// Assemble a single data point that sets every workflow variable to its
  /// static value.
  pub fn to_static_data_point_document(&self, version: u32) -> Result<Value, FormulationError> {
    check_version(version, "to_static_data_point_document")?;

    let mut values = Map::new();
    if let Some(workflow) = self.workflow() {
      for step in workflow.items() {
        for variable in step.variables() {
          values.insert(variable.uuid.clone(), variable.static_value.clone());
        }
      }
    }

    Ok(json!({
      "data_point": {
        "set_variable_values": values,
        "status": "na",
        "uuid": self.uuid_generator().generate().to_string(),
      }
    }))
  }

  /// Names of objective-function outputs in declaration order. Unnamed
  /// outputs are skipped; duplicates are kept.
  fn objective_function_names(&self) -> Vec<Value> {
    self
      .outputs()
      .iter()
      .filter(|output| output.is_objective_function())
      .filter_map(|output| output.name().cloned())
      .collect()
  }
}

/// Write `names` into `analysis.problem.algorithm.objective_functions`,
/// overwriting any existing list.
///
/// Returns `false` without touching the document when there is no algorithm
/// object to write into.
pub fn inject_objective_functions(document: &mut Value, names: Vec<Value>) -> bool {
  match document.pointer_mut("/analysis/problem/algorithm") {
    Some(Value::Object(algorithm)) => {
      algorithm.insert("objective_functions".to_string(), Value::Array(names));
      true
    }
    _ => false,
  }
}

fn check_version(version: u32, operation: &'static str) -> Result<(), FormulationError> {
  if version == FILE_FORMAT_VERSION {
    Ok(())
  } else {
    Err(FormulationError::UnsupportedVersion {
      version,
      operation,
      component: COMPONENT,
    })
  }
}

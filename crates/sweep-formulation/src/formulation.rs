use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use sweep_algorithm::Algorithm;
use sweep_config::{FormulationDef, OutputDeclaration, SeedModel, WeatherFile};
use sweep_workflow::{RandomUuidGenerator, UuidGenerator, Workflow, WorkflowStep};
use tracing::debug;

use crate::error::FormulationError;

/// The root definition of one parametric analysis.
#[derive(Clone)]
pub struct Formulation {
  display_name: String,
  analysis_type: Option<String>,
  seed_model: SeedModel,
  weather_file: WeatherFile,
  /// Created on first access.
  workflow: Option<Workflow>,
  algorithm: Algorithm,
  outputs: Vec<OutputDeclaration>,
  uuid_generator: Arc<dyn UuidGenerator>,
}

impl Formulation {
  /// Create an empty formulation. The workflow is not created until it is
  /// first accessed.
  pub fn new(display_name: impl Into<String>) -> Self {
    Self {
      display_name: display_name.into(),
      analysis_type: None,
      seed_model: SeedModel::default(),
      weather_file: WeatherFile::default(),
      workflow: None,
      algorithm: Algorithm::default(),
      outputs: Vec::new(),
      uuid_generator: Arc::new(RandomUuidGenerator),
    }
  }

  /// Replace the identifier source used for data points and for variables
  /// created through [`Formulation::from_def`].
  pub fn with_uuid_generator(mut self, generator: Arc<dyn UuidGenerator>) -> Self {
    self.uuid_generator = generator;
    self
  }

  /// Build a formulation from an on-disk definition.
  pub fn from_def(def: FormulationDef) -> Result<Self, FormulationError> {
    Self::from_def_with_uuid_generator(def, Arc::new(RandomUuidGenerator))
  }

  pub fn from_def_with_uuid_generator(
    def: FormulationDef,
    generator: Arc<dyn UuidGenerator>,
  ) -> Result<Self, FormulationError> {
    let mut formulation = Self::new(def.display_name).with_uuid_generator(generator);

    if let Some(analysis_type) = def.analysis_type {
      formulation.set_analysis_type(analysis_type);
    }
    if let Some(seed) = def.seed {
      formulation.set_seed_model_path(seed);
    }
    if let Some(weather_file) = def.weather_file {
      formulation.set_weather_file_path(weather_file);
    }
    for (name, value) in def.algorithm {
      formulation.algorithm.set_attribute(name, value);
    }

    let ids = Arc::clone(&formulation.uuid_generator);
    let workflow = formulation.get_or_create_workflow();
    for step_def in def.steps {
      let step = WorkflowStep::from_def(step_def, ids.as_ref())?;
      workflow.add_step(step)?;
    }

    for fields in def.outputs {
      formulation.add_output(fields);
    }

    Ok(formulation)
  }

  pub fn display_name(&self) -> &str {
    &self.display_name
  }

  pub fn analysis_type(&self) -> Option<&str> {
    self.analysis_type.as_deref()
  }

  /// Store the analysis type verbatim; the execution engine decides whether
  /// it knows the name.
  pub fn set_analysis_type(&mut self, analysis_type: impl Into<String>) {
    let analysis_type = analysis_type.into();
    debug!(analysis_type = %analysis_type, "analysis type set");
    self.analysis_type = Some(analysis_type);
  }

  pub fn seed_model(&self) -> &SeedModel {
    &self.seed_model
  }

  pub fn set_seed_model_path(&mut self, path: impl Into<String>) {
    self.seed_model = SeedModel::new(path);
    debug!(seed = ?self.seed_model.path(), "seed model set");
  }

  pub fn weather_file(&self) -> &WeatherFile {
    &self.weather_file
  }

  pub fn set_weather_file_path(&mut self, path: impl Into<String>) {
    self.weather_file = WeatherFile::new(path);
    debug!(weather_file = ?self.weather_file.path(), "weather file set");
  }

  /// The workflow, created with defaults on first access. Every later call
  /// returns the same instance.
  pub fn get_or_create_workflow(&mut self) -> &mut Workflow {
    self.workflow.get_or_insert_with(Workflow::default)
  }

  /// The workflow if it has been created or assigned.
  pub fn workflow(&self) -> Option<&Workflow> {
    self.workflow.as_ref()
  }

  pub fn set_workflow(&mut self, workflow: Workflow) {
    self.workflow = Some(workflow);
  }

  pub fn algorithm(&self) -> &Algorithm {
    &self.algorithm
  }

  pub fn algorithm_mut(&mut self) -> &mut Algorithm {
    &mut self.algorithm
  }

  pub(crate) fn uuid_generator(&self) -> &dyn UuidGenerator {
    self.uuid_generator.as_ref()
  }

  /// Declared outputs in the order they were added.
  pub fn outputs(&self) -> &[OutputDeclaration] {
    &self.outputs
  }

  /// Overlay `fields` on the output defaults and append the result.
  ///
  /// Duplicate names are allowed and kept in order.
  pub fn add_output(&mut self, fields: impl Into<Map<String, Value>>) -> &OutputDeclaration {
    let output = OutputDeclaration::from_fields(fields.into());
    debug!(name = ?output.name(), objective = output.is_objective_function(), "output added");
    self.outputs.push(output);
    &self.outputs[self.outputs.len() - 1]
  }
}

impl fmt::Debug for Formulation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Formulation")
      .field("display_name", &self.display_name)
      .field("analysis_type", &self.analysis_type)
      .field("seed_model", &self.seed_model)
      .field("weather_file", &self.weather_file)
      .field("workflow", &self.workflow)
      .field("algorithm", &self.algorithm)
      .field("outputs", &self.outputs)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use sweep_config::OutputFields;

  fn fields(value: Value) -> Map<String, Value> {
    match value {
      Value::Object(map) => map,
      other => panic!("expected object, got {other}"),
    }
  }

  #[test]
  fn test_new_formulation() {
    let formulation = Formulation::new("My Analysis");

    assert_eq!(formulation.display_name(), "My Analysis");
    assert_eq!(formulation.analysis_type(), None);
    assert_eq!(formulation.seed_model().path(), None);
    assert_eq!(formulation.weather_file().path(), None);
    assert!(formulation.workflow().is_none());
    assert!(formulation.outputs().is_empty());
    assert_eq!(formulation.algorithm(), &Algorithm::default());
  }

  #[test]
  fn test_workflow_is_created_once() {
    let mut formulation = Formulation::new("Lazy");

    let first: *const Workflow = formulation.get_or_create_workflow();
    let second: *const Workflow = formulation.get_or_create_workflow();

    assert!(std::ptr::eq(first, second));
    assert!(formulation.workflow().is_some());
  }

  #[test]
  fn test_workflow_keeps_steps_between_accesses() {
    let mut formulation = Formulation::new("Lazy");
    formulation
      .get_or_create_workflow()
      .add_step(WorkflowStep::new("a", "A", "ModelMeasure"))
      .unwrap();

    assert_eq!(formulation.get_or_create_workflow().items().len(), 1);
  }

  #[test]
  fn test_set_workflow_replaces() {
    let mut formulation = Formulation::new("Assigned");
    formulation.get_or_create_workflow();

    let mut workflow = Workflow::new();
    workflow
      .add_step(WorkflowStep::new("b", "B", "ModelMeasure"))
      .unwrap();
    formulation.set_workflow(workflow.clone());

    assert_eq!(formulation.workflow(), Some(&workflow));
  }

  #[test]
  fn test_set_paths_replace_references() {
    let mut formulation = Formulation::new("Paths");
    formulation.set_seed_model_path("a.osm");
    formulation.set_seed_model_path("b.osm");
    formulation.set_weather_file_path("weather/");

    assert_eq!(formulation.seed_model(), &SeedModel::new("b.osm"));
    assert_eq!(formulation.weather_file().path(), Some("weather/"));
  }

  #[test]
  fn test_analysis_type_stored_verbatim() {
    let mut formulation = Formulation::new("Types");
    formulation.set_analysis_type("not_a_real_algorithm");
    assert_eq!(formulation.analysis_type(), Some("not_a_real_algorithm"));
  }

  #[test]
  fn test_add_output_merges_defaults() {
    let mut formulation = Formulation::new("Outputs");
    let output = formulation
      .add_output(fields(json!({ "name": "energy", "units": "kWh", "extra": 1 })))
      .clone();

    assert_eq!(output.get("name"), Some(&json!("energy")));
    assert_eq!(output.get("units"), Some(&json!("kWh")));
    assert_eq!(output.get("extra"), Some(&json!(1)));
    assert_eq!(output.get("objective_function"), Some(&json!(false)));
    assert_eq!(output.get("scaling_factor"), Some(&Value::Null));
    assert_eq!(formulation.outputs().last(), Some(&output));
  }

  #[test]
  fn test_duplicate_outputs_kept_in_order() {
    let mut formulation = Formulation::new("Outputs");
    formulation.add_output(OutputFields::named("energy"));
    formulation.add_output(OutputFields::named("cost"));
    formulation.add_output(OutputFields::named("energy").units("kWh"));

    let names: Vec<_> = formulation.outputs().iter().map(|o| o.name().cloned()).collect();
    assert_eq!(
      names,
      vec![Some(json!("energy")), Some(json!("cost")), Some(json!("energy"))]
    );
  }

  #[test]
  fn test_from_def() {
    let def: FormulationDef = serde_json::from_value(json!({
      "display_name": "Office Retrofit",
      "analysis_type": "lhs",
      "seed": "office.osm",
      "weather_file": "chicago.epw",
      "algorithm": { "number_of_samples": 20 },
      "steps": [{
        "name": "set_wwr",
        "display_name": "Set WWR",
        "measure_type": "ModelMeasure",
        "arguments": [{ "name": "wwr", "default_value": 0.4 }],
        "variables": [{
          "argument": "wwr",
          "display_name": "WWR",
          "distribution": { "type": "uniform", "minimum": 0.1, "maximum": 0.6, "mean": 0.4 },
          "static_value": 0.4
        }]
      }],
      "outputs": [{ "name": "total_energy", "objective_function": true }]
    }))
    .unwrap();

    let formulation = Formulation::from_def(def).unwrap();

    assert_eq!(formulation.analysis_type(), Some("lhs"));
    assert_eq!(formulation.seed_model().path(), Some("office.osm"));
    assert_eq!(formulation.weather_file().path(), Some("chicago.epw"));
    assert_eq!(formulation.algorithm().attribute("number_of_samples"), Some(&json!(20)));
    assert_eq!(formulation.algorithm().attribute("debug_messages"), Some(&json!(0)));
    assert_eq!(formulation.workflow().unwrap().items()[0].variables().len(), 1);
    assert!(formulation.outputs()[0].is_objective_function());
  }

  #[test]
  fn test_from_def_rejects_invalid_variable() {
    let def: FormulationDef = serde_json::from_value(json!({
      "display_name": "Broken",
      "steps": [{
        "name": "set_wwr",
        "display_name": "Set WWR",
        "measure_type": "ModelMeasure",
        "arguments": [{ "name": "wwr", "default_value": 0.4 }],
        "variables": [{
          "argument": "wwr",
          "display_name": "WWR",
          "distribution": { "type": "uniform", "minimum": 0.6, "maximum": 0.1, "mean": 0.4 },
          "static_value": 0.4
        }]
      }]
    }))
    .unwrap();

    let result = Formulation::from_def(def);
    assert!(matches!(result, Err(FormulationError::Workflow(_))));
  }
}

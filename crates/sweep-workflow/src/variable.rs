use serde::{Deserialize, Serialize};
use serde_json::Value;
use sweep_config::{Distribution, DistributionKind};

use crate::error::WorkflowError;
use crate::ids::UuidGenerator;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// A sampled parameter bound to one argument of a workflow step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
  /// Unique identifier; the key in a data point's `set_variable_values`.
  pub uuid: String,
  pub version_uuid: String,
  /// Name of the argument this variable drives.
  pub argument: String,
  pub display_name: String,
  pub display_name_short: String,
  pub variable_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub units: Option<String>,
  pub distribution: Distribution,
  /// Value used when the workflow runs as a single static data point.
  pub static_value: Value,
}

impl Variable {
  /// Create a variable after validating its distribution and static value.
  pub fn new(
    argument: impl Into<String>,
    display_name: impl Into<String>,
    distribution: Distribution,
    static_value: Value,
    ids: &dyn UuidGenerator,
  ) -> Result<Self, WorkflowError> {
    let argument = argument.into();
    validate_distribution(&argument, &distribution)?;
    if static_value.is_null() {
      return Err(WorkflowError::MissingStaticValue { argument });
    }

    let display_name = display_name.into();
    Ok(Self {
      uuid: ids.generate().to_string(),
      version_uuid: ids.generate().to_string(),
      display_name_short: display_name.clone(),
      display_name,
      argument,
      variable_type: "variable".to_string(),
      units: None,
      distribution,
      static_value,
    })
  }

  pub fn with_units(mut self, units: impl Into<String>) -> Self {
    self.units = Some(units.into());
    self
  }

  pub fn with_display_name_short(mut self, short: impl Into<String>) -> Self {
    self.display_name_short = short.into();
    self
  }
}

fn validate_distribution(argument: &str, dist: &Distribution) -> Result<(), WorkflowError> {
  let invalid = |reason: String| WorkflowError::InvalidDistribution {
    argument: argument.to_string(),
    reason,
  };

  let scalars = [
    ("minimum", dist.minimum),
    ("maximum", dist.maximum),
    ("mean", dist.mean),
    ("standard_deviation", dist.standard_deviation),
    ("step_size", dist.step_size),
  ];
  for (field, value) in scalars {
    if let Some(value) = value
      && !value.is_finite()
    {
      return Err(invalid(format!("{field} is not finite: {value}")));
    }
  }
  if let Some(value) = dist.values.iter().find(|v| !v.is_finite()) {
    return Err(invalid(format!("discrete value is not finite: {value}")));
  }
  if let Some(weight) = dist.weights.iter().find(|w| !w.is_finite()) {
    return Err(invalid(format!("discrete weight is not finite: {weight}")));
  }

  if let (Some(min), Some(max)) = (dist.minimum, dist.maximum)
    && min > max
  {
    return Err(invalid(format!(
      "minimum {min} is greater than maximum {max}"
    )));
  }

  match dist.kind {
    DistributionKind::Uniform
    | DistributionKind::Triangle
    | DistributionKind::Normal
    | DistributionKind::Lognormal => {
      let (Some(min), Some(max), Some(mean)) = (dist.minimum, dist.maximum, dist.mean) else {
        return Err(invalid("minimum, maximum, and mean are required".to_string()));
      };
      if mean < min || mean > max {
        return Err(invalid(format!("mean {mean} is outside [{min}, {max}]")));
      }
      if matches!(
        dist.kind,
        DistributionKind::Normal | DistributionKind::Lognormal
      ) && !dist.standard_deviation.is_some_and(|sd| sd > 0.0)
      {
        return Err(invalid("standard_deviation must be positive".to_string()));
      }
    }
    DistributionKind::Discrete => {
      if dist.values.is_empty() {
        return Err(invalid("discrete values are empty".to_string()));
      }
      if dist.values.len() != dist.weights.len() {
        return Err(invalid(format!(
          "{} values but {} weights",
          dist.values.len(),
          dist.weights.len()
        )));
      }
      let total: f64 = dist.weights.iter().sum();
      if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(invalid(format!("weights sum to {total}, expected 1")));
      }
    }
    DistributionKind::IntegerSequence => {
      if dist.minimum.is_none() || dist.maximum.is_none() {
        return Err(invalid("minimum and maximum are required".to_string()));
      }
      if !dist.step_size.is_some_and(|step| step > 0.0) {
        return Err(invalid("step_size must be positive".to_string()));
      }
    }
  }

  Ok(())
}

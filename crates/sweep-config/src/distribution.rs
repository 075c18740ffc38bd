use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
  Uniform,
  Triangle,
  Normal,
  Lognormal,
  Discrete,
  IntegerSequence,
}

/// Sampling distribution for a workflow variable.
///
/// Which bounds are meaningful depends on `kind`; the workflow validates the
/// combination when a variable is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
  #[serde(rename = "type")]
  pub kind: DistributionKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub minimum: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub maximum: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mean: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub standard_deviation: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub step_size: Option<f64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub values: Vec<f64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub weights: Vec<f64>,
}

impl Distribution {
  fn bounded(kind: DistributionKind, minimum: f64, maximum: f64, mean: f64) -> Self {
    Self {
      kind,
      minimum: Some(minimum),
      maximum: Some(maximum),
      mean: Some(mean),
      standard_deviation: None,
      step_size: None,
      values: Vec::new(),
      weights: Vec::new(),
    }
  }

  pub fn uniform(minimum: f64, maximum: f64, mean: f64) -> Self {
    Self::bounded(DistributionKind::Uniform, minimum, maximum, mean)
  }

  /// Triangle distribution; `mean` is the mode.
  pub fn triangle(minimum: f64, maximum: f64, mean: f64) -> Self {
    Self::bounded(DistributionKind::Triangle, minimum, maximum, mean)
  }

  pub fn normal(minimum: f64, maximum: f64, mean: f64, standard_deviation: f64) -> Self {
    Self {
      standard_deviation: Some(standard_deviation),
      ..Self::bounded(DistributionKind::Normal, minimum, maximum, mean)
    }
  }

  pub fn lognormal(minimum: f64, maximum: f64, mean: f64, standard_deviation: f64) -> Self {
    Self {
      standard_deviation: Some(standard_deviation),
      ..Self::bounded(DistributionKind::Lognormal, minimum, maximum, mean)
    }
  }

  pub fn discrete(values: Vec<f64>, weights: Vec<f64>) -> Self {
    Self {
      kind: DistributionKind::Discrete,
      minimum: values.iter().copied().reduce(f64::min),
      maximum: values.iter().copied().reduce(f64::max),
      mean: None,
      standard_deviation: None,
      step_size: None,
      values,
      weights,
    }
  }

  pub fn integer_sequence(minimum: f64, maximum: f64, step_size: f64) -> Self {
    Self {
      kind: DistributionKind::IntegerSequence,
      minimum: Some(minimum),
      maximum: Some(maximum),
      mean: None,
      standard_deviation: None,
      step_size: Some(step_size),
      values: Vec::new(),
      weights: Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_uniform_serializes_without_unused_fields() {
    let value = serde_json::to_value(Distribution::uniform(0.0, 10.0, 5.0)).unwrap();
    assert_eq!(
      value,
      json!({ "type": "uniform", "minimum": 0.0, "maximum": 10.0, "mean": 5.0 })
    );
  }

  #[test]
  fn test_discrete_derives_bounds_from_values() {
    let dist = Distribution::discrete(vec![3.0, 1.0, 2.0], vec![0.2, 0.3, 0.5]);
    assert_eq!(dist.minimum, Some(1.0));
    assert_eq!(dist.maximum, Some(3.0));
  }

  #[test]
  fn test_deserialize_integer_sequence() {
    let dist: Distribution = serde_json::from_value(json!({
      "type": "integer_sequence",
      "minimum": 1,
      "maximum": 5,
      "step_size": 1
    }))
    .unwrap();
    assert_eq!(dist, Distribution::integer_sequence(1.0, 5.0, 1.0));
  }
}

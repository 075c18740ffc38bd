use serde::{Deserialize, Serialize};

/// Reference to the base simulation model file.
///
/// An empty reference serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedModel {
  path: Option<String>,
}

impl SeedModel {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: Some(path.into()),
    }
  }

  pub fn path(&self) -> Option<&str> {
    self.path.as_deref()
  }
}

/// Reference to a weather input file or a directory of weather files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherFile {
  path: Option<String>,
}

impl WeatherFile {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: Some(path.into()),
    }
  }

  pub fn path(&self) -> Option<&str> {
    self.path.as_deref()
  }
}

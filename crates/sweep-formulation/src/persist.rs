use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::FILE_FORMAT_VERSION;
use crate::error::FormulationError;
use crate::formulation::Formulation;

impl Formulation {
  /// Write the analysis document to `path` as pretty-printed JSON.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FormulationError> {
    self.save_with_version(path, FILE_FORMAT_VERSION)
  }

  pub fn save_with_version(
    &self,
    path: impl AsRef<Path>,
    version: u32,
  ) -> Result<(), FormulationError> {
    let document = self.to_document(version)?;
    write_document(path.as_ref(), &document)?;
    info!(analysis = %self.display_name(), path = %path.as_ref().display(), "analysis saved");
    Ok(())
  }

  /// Write the static data point document to `path` as pretty-printed JSON.
  pub fn save_static_data_point(&self, path: impl AsRef<Path>) -> Result<(), FormulationError> {
    self.save_static_data_point_with_version(path, FILE_FORMAT_VERSION)
  }

  pub fn save_static_data_point_with_version(
    &self,
    path: impl AsRef<Path>,
    version: u32,
  ) -> Result<(), FormulationError> {
    let document = self.to_static_data_point_document(version)?;
    write_document(path.as_ref(), &document)?;
    info!(
      analysis = %self.display_name(),
      path = %path.as_ref().display(),
      "static data point saved"
    );
    Ok(())
  }
}

/// Serialize first so a failed render never truncates an existing file, then
/// create/truncate and write. Parent directories are not created.
fn write_document(path: &Path, document: &Value) -> Result<(), FormulationError> {
  let content = serde_json::to_string_pretty(document)?;

  let io_err = |source| FormulationError::Io {
    path: path.to_path_buf(),
    source,
  };
  let mut file = File::create(path).map_err(io_err)?;
  file.write_all(content.as_bytes()).map_err(io_err)?;
  file.flush().map_err(io_err)?;
  Ok(())
}

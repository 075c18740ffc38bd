use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// An explicit `level` wins over `RUST_LOG`; with neither set only warnings
/// and errors are shown so stdout stays clean for piped documents.
pub fn init(level: Option<&str>) {
  let filter = match level {
    Some(level) => EnvFilter::new(level),
    None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
  };

  fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(true)
    .init();
}

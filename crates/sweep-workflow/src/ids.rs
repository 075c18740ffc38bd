use uuid::Uuid;

/// Source of unique identifiers for variables and data points.
///
/// The formulation and workflow never call into a global random source
/// directly; tests plug in a deterministic implementation instead.
pub trait UuidGenerator: Send + Sync {
  fn generate(&self) -> Uuid;
}

/// Random (v4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
  fn generate(&self) -> Uuid {
    Uuid::new_v4()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_random_generator_is_v4_and_unique() {
    let generator = RandomUuidGenerator;
    let a = generator.generate();
    let b = generator.generate();

    assert_eq!(a.get_version_num(), 4);
    assert_ne!(a, b);
  }
}

/// Convert a display name into an identifier-safe name.
///
/// Lowercases ASCII letters, collapses every run of other characters into a
/// single underscore, and trims underscores from both ends. The result only
/// contains `[a-z0-9_]`.
pub fn to_snake_case(display_name: &str) -> String {
  let mut name = String::with_capacity(display_name.len());
  let mut pending_separator = false;

  for c in display_name.chars() {
    if c.is_ascii_alphanumeric() {
      if pending_separator && !name.is_empty() {
        name.push('_');
      }
      pending_separator = false;
      name.push(c.to_ascii_lowercase());
    } else {
      pending_separator = true;
    }
  }

  name
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_spaces() {
    assert_eq!(to_snake_case("My Analysis"), "my_analysis");
  }

  #[test]
  fn test_punctuation_runs_collapse() {
    assert_eq!(to_snake_case("Office -- Retrofit (v2)"), "office_retrofit_v2");
  }

  #[test]
  fn test_leading_and_trailing_separators_trimmed() {
    assert_eq!(to_snake_case("  __Baseline!! "), "baseline");
  }

  #[test]
  fn test_already_snake_case() {
    assert_eq!(to_snake_case("lhs_run_2"), "lhs_run_2");
  }

  #[test]
  fn test_non_ascii_letters_become_separators() {
    assert_eq!(to_snake_case("İstanbul Run"), "stanbul_run");
    assert_eq!(to_snake_case("Café Study"), "caf_study");
    assert_eq!(to_snake_case("Ölçüm 2"), "l_m_2");

    for name in ["İstanbul Run", "Café Study", "Zürich Öffice"] {
      let snake = to_snake_case(name);
      assert!(
        snake.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
        "{snake:?}"
      );
    }
  }

  #[test]
  fn test_empty_and_symbols_only() {
    assert_eq!(to_snake_case(""), "");
    assert_eq!(to_snake_case("*** ---"), "");
  }
}

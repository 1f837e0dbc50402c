//! Named fixture definitions loaded from YAML.
//!
//! A schema file lets a test suite keep its fixture shapes next to its data:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! fixtures:
//!   - name: user
//!     object:
//!       key_val_pairs: 4
//!       skeleton: [id, email]
//!   - name: tags
//!     array: { min_length: 1, max_length: 3, value_kinds: [string] }
//!   - name: anything
//!     random: [number, object]
//! ```

use crate::config::{ArrayConfig, BooleanConfig, NumberConfig, ObjectConfig, StringConfig};
use crate::error::GeneratorError;
use crate::kind::Kind;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two fixtures share a name
    #[error("Duplicate fixture name: {0}")]
    DuplicateFixture(String),

    /// Fixture configuration failed validation
    #[error("Invalid fixture '{fixture}': {source}")]
    Invalid {
        fixture: String,
        #[source]
        source: GeneratorError,
    },
}

// ============================================================================
// Fixture Types
// ============================================================================

/// What a fixture produces, with its configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureSpec {
    Number(NumberConfig),
    String(StringConfig),
    Boolean(BooleanConfig),
    Object(ObjectConfig),
    Array(ArrayConfig),
    /// One value of a kind picked from the list (all kinds when empty)
    Random(Vec<Kind>),
}

impl FixtureSpec {
    /// Kind of the produced value, if fixed.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::Number(_) => Some(Kind::Number),
            Self::String(_) => Some(Kind::String),
            Self::Boolean(_) => Some(Kind::Boolean),
            Self::Object(_) => Some(Kind::Object),
            Self::Array(_) => Some(Kind::Array),
            Self::Random(_) => None,
        }
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        match self {
            Self::Number(config) => config.validate(),
            Self::String(config) => config.validate(),
            Self::Boolean(config) => config.validate(),
            Self::Object(config) => config.validate(),
            Self::Array(config) => config.validate(),
            Self::Random(_) => Ok(()),
        }
    }
}

/// A named fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureDefinition {
    /// Fixture name
    pub name: String,

    /// Kind and configuration
    #[serde(flatten)]
    pub spec: FixtureSpec,
}

fn default_version() -> u32 {
    1
}

/// Collection of named fixtures.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed used when the caller does not supply one
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fixture definitions
    pub fixtures: Vec<FixtureDefinition>,

    /// Cached fixture lookup (not serialized)
    #[serde(skip)]
    fixture_map: HashMap<String, usize>,
}

impl FixtureSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    ///
    /// Every fixture is validated here, so a loaded schema never fails later
    /// on configuration grounds.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: FixtureSchema = serde_yaml::from_str(yaml)?;
        schema.build_fixture_map()?;
        for fixture in &schema.fixtures {
            fixture.spec.validate().map_err(|source| SchemaError::Invalid {
                fixture: fixture.name.clone(),
                source,
            })?;
        }
        Ok(schema)
    }

    /// Build the internal fixture lookup map.
    fn build_fixture_map(&mut self) -> Result<(), SchemaError> {
        self.fixture_map.clear();
        for (idx, fixture) in self.fixtures.iter().enumerate() {
            if self.fixture_map.insert(fixture.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateFixture(fixture.name.clone()));
            }
        }
        Ok(())
    }

    /// Get a fixture by name.
    pub fn get_fixture(&self, name: &str) -> Option<&FixtureDefinition> {
        self.fixture_map
            .get(name)
            .and_then(|&idx| self.fixtures.get(idx))
    }

    /// Get all fixture names in declaration order.
    pub fn fixture_names(&self) -> Vec<&str> {
        self.fixtures.iter().map(|f| f.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Casing, Skeleton};
    use std::io::Write;

    const SCHEMA: &str = r#"
version: 1
seed: 42

fixtures:
  - name: user
    object:
      key_val_pairs: 4
      skeleton: [id, email]
      value_preference: [number, string]

  - name: settings
    object:
      key_val_pairs: 3
      skeleton:
        theme: dark

  - name: tags
    array:
      min_length: 1
      max_length: 3
      value_kinds: [string]
      template_array: [first]

  - name: code
    string:
      min_length: 6
      max_length: 6
      allow_non_letters: false
      casing: upper

  - name: active
    boolean:
      weight_percent: 80

  - name: age
    number: { min: 18, max: 80 }

  - name: anything
    random: [number, object]
"#;

    #[test]
    fn test_parse_schema() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();
        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.fixtures.len(), 7);
        assert_eq!(
            schema.fixture_names(),
            vec!["user", "settings", "tags", "code", "active", "age", "anything"]
        );
    }

    #[test]
    fn test_fixture_specs() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();

        let user = schema.get_fixture("user").unwrap();
        if let FixtureSpec::Object(config) = &user.spec {
            assert_eq!(config.key_val_pairs, Some(4));
            assert_eq!(config.skeleton, Some(Skeleton::keys(["id", "email"])));
            assert_eq!(
                config.value_preference,
                Some(vec![Kind::Number, Kind::String])
            );
        } else {
            panic!("Expected object fixture");
        }

        let code = schema.get_fixture("code").unwrap();
        if let FixtureSpec::String(config) = &code.spec {
            assert_eq!(config.casing, Some(Casing::Upper));
            assert!(!config.allow_non_letters);
        } else {
            panic!("Expected string fixture");
        }

        assert_eq!(schema.get_fixture("age").unwrap().spec.kind(), Some(Kind::Number));
        assert_eq!(schema.get_fixture("anything").unwrap().spec.kind(), None);
        assert!(schema.get_fixture("missing").is_none());
    }

    #[test]
    fn test_duplicate_fixture() {
        let yaml = r#"
fixtures:
  - name: a
    boolean: {}
  - name: a
    number: {}
"#;
        let result = FixtureSchema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::DuplicateFixture(name)) if name == "a"));
    }

    #[test]
    fn test_invalid_fixture_config() {
        let yaml = r#"
fixtures:
  - name: cramped
    object:
      key_val_pairs: 1
      skeleton: { a: 1, b: 2 }
"#;
        let result = FixtureSchema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::Invalid {
                source: GeneratorError::InsufficientKeyBudget { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_skeleton_in_yaml() {
        let yaml = r#"
fixtures:
  - name: broken
    object:
      skeleton: 12
"#;
        let err = FixtureSchema::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SchemaError::YamlError(_)));
        assert!(err.to_string().contains("Invalid skeleton"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCHEMA.as_bytes()).unwrap();

        let schema = FixtureSchema::from_file(file.path()).unwrap();
        assert_eq!(schema.fixtures.len(), 7);

        let missing = FixtureSchema::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(SchemaError::IoError(_))));
    }
}

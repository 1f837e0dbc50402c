//! The closed set of value kinds the generator knows how to produce.

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag identifying which value category a generated value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Number,
    String,
    Boolean,
    Object,
    Array,
}

/// Every kind, in selection order.
pub const ALL_KINDS: &[Kind] = &[
    Kind::Number,
    Kind::String,
    Kind::Boolean,
    Kind::Object,
    Kind::Array,
];

/// Kinds allowed once the depth limit is reached.
pub const PRIMITIVE_KINDS: &[Kind] = &[Kind::Number, Kind::String, Kind::Boolean];

impl Kind {
    /// Whether this kind nests other values.
    pub fn is_composite(self) -> bool {
        matches!(self, Kind::Object | Kind::Array)
    }

    /// Lowercase name, as used in configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "number" => Ok(Kind::Number),
            "string" => Ok(Kind::String),
            "boolean" => Ok(Kind::Boolean),
            "object" => Ok(Kind::Object),
            "array" => Ok(Kind::Array),
            _ => Err(GeneratorError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_names() {
        assert_eq!("number".parse::<Kind>().unwrap(), Kind::Number);
        assert_eq!("Object".parse::<Kind>().unwrap(), Kind::Object);
        assert_eq!(
            "date".parse::<Kind>(),
            Err(GeneratorError::UnknownKind("date".to_string()))
        );
    }

    #[test]
    fn test_composite_kinds() {
        let composites: Vec<Kind> = ALL_KINDS
            .iter()
            .copied()
            .filter(|k| k.is_composite())
            .collect();
        assert_eq!(composites, vec![Kind::Object, Kind::Array]);
        assert!(PRIMITIVE_KINDS.iter().all(|k| !k.is_composite()));
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let kinds: Vec<Kind> = serde_yaml::from_str("[number, array]").unwrap();
        assert_eq!(kinds, vec![Kind::Number, Kind::Array]);
        assert_eq!(serde_json::to_string(&Kind::Boolean).unwrap(), "\"boolean\"");
    }
}

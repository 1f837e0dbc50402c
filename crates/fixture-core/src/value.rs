//! Generated value tree.
//!
//! `Value` is what every generator returns. It is a plain owned tree with no
//! sharing between siblings, and converts losslessly to and from JSON.

use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;

/// A generated (or caller-supplied) value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value. Only ever carried through from skeletons and templates.
    Null,

    /// Boolean value
    Bool(bool),

    /// Integral number
    Int(i64),

    /// Continuous number
    Float(f64),

    /// String value
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object/map of values
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// The kind of this value, `None` for null.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(Kind::Boolean),
            Self::Int(_) | Self::Float(_) => Some(Kind::Number),
            Self::String(_) => Some(Kind::String),
            Self::Array(_) => Some(Kind::Array),
            Self::Object(_) => Some(Kind::Object),
        }
    }

    /// Short description used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value is an object or an array.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Number of composite levels below this value.
    ///
    /// Primitives and composites that only hold primitives report 0; every
    /// nested object or array adds one level.
    pub fn nesting_depth(&self) -> usize {
        fn deepest<'a>(children: impl Iterator<Item = &'a Value>) -> usize {
            children
                .filter(|v| v.is_composite())
                .map(|v| 1 + v.nesting_depth())
                .max()
                .unwrap_or(0)
        }

        match self {
            Self::Array(arr) => deepest(arr.iter()),
            Self::Object(obj) => deepest(obj.values()),
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Self::Array(arr)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(obj: BTreeMap<String, Value>) -> Self {
        Self::Object(obj)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            // NaN and infinities have no JSON form
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(Into::into).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&YamlValue> for Value {
    fn from(yaml: &YamlValue) -> Self {
        match yaml {
            YamlValue::Null => Value::Null,
            YamlValue::Bool(b) => Value::Bool(*b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::String(n.to_string())
                }
            }
            YamlValue::String(s) => Value::String(s.clone()),
            YamlValue::Sequence(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            YamlValue::Mapping(map) => {
                let values: BTreeMap<String, Value> = map
                    .iter()
                    .filter_map(|(k, v)| {
                        let key = match k {
                            YamlValue::String(s) => s.clone(),
                            YamlValue::Number(n) => n.to_string(),
                            YamlValue::Bool(b) => b.to_string(),
                            _ => return None,
                        };
                        Some((key, Value::from(v)))
                    })
                    .collect();
                Value::Object(values)
            }
            YamlValue::Tagged(tagged) => Value::from(&tagged.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_values() {
        assert_eq!(Value::Int(3).kind(), Some(Kind::Number));
        assert_eq!(Value::Float(0.5).kind(), Some(Kind::Number));
        assert_eq!(Value::from("x").kind(), Some(Kind::String));
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::Array(vec![]).kind(), Some(Kind::Array));
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(Value::Int(1).nesting_depth(), 0);
        assert_eq!(Value::Array(vec![Value::Int(1)]).nesting_depth(), 0);

        let nested: Value = json!({"a": [1, {"b": []}], "c": true}).into();
        assert_eq!(nested.nesting_depth(), 2);
    }

    #[test]
    fn test_json_conversion() {
        let json = json!({"name": "test", "tags": ["a", 2, 2.5, null]});
        let value = Value::from(json.clone());

        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name"), Some(&Value::String("test".to_string())));
        let tags = obj.get("tags").and_then(Value::as_array).unwrap();
        assert_eq!(tags[1], Value::Int(2));
        assert_eq!(tags[2], Value::Float(2.5));
        assert!(tags[3].is_null());

        assert_eq!(serde_json::Value::from(value), json);
    }

    #[test]
    fn test_yaml_conversion() {
        let yaml: YamlValue = serde_yaml::from_str("{ version: 1, name: test, 7: seven }").unwrap();
        if let Value::Object(obj) = Value::from(&yaml) {
            assert_eq!(obj.get("version"), Some(&Value::Int(1)));
            assert_eq!(obj.get("7"), Some(&Value::String("seven".to_string())));
        } else {
            panic!("Expected Object");
        }
    }

    #[test]
    fn test_untagged_deserialize() {
        let value: Value = serde_yaml::from_str("[1, 1.5, x, true, ~]").unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Int(1),
                Value::Float(1.5),
                Value::from("x"),
                Value::Bool(true),
                Value::Null,
            ])
        );
    }

    #[test]
    fn test_nan_serializes_as_null() {
        assert_eq!(
            serde_json::Value::from(Value::Float(f64::NAN)),
            serde_json::Value::Null
        );
    }
}

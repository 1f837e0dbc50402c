//! Per-operation configuration.
//!
//! Each generator operation takes one explicit config struct. Defaults live
//! in the `Default` impls below and nowhere else; `validate()` is called once
//! at the facade boundary before any value is produced.

use crate::error::{GeneratorError, Result};
use crate::kind::Kind;
use crate::value::Value;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Default nesting limit for composites.
pub const DEFAULT_MAX_DEPTH: usize = 3;

// ============================================================================
// Primitive Configs
// ============================================================================

/// Configuration for random numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    /// Minimum value (inclusive)
    pub min: f64,
    /// Maximum value (inclusive)
    pub max: f64,
    /// Produce integers when true, continuous values otherwise
    pub rounded: bool,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            rounded: true,
        }
    }
}

impl NumberConfig {
    /// Integral numbers in `min..=max`.
    pub fn range(min: i64, max: i64) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            rounded: true,
        }
    }

    /// Continuous numbers in `min..=max`.
    pub fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            rounded: false,
        }
    }

    /// Integral bounds for rounded draws: `ceil(min)..=floor(max)`.
    pub fn integer_bounds(&self) -> Result<(i64, i64)> {
        let (lo, hi) = (self.min.ceil(), self.max.floor());
        if lo > hi {
            return Err(GeneratorError::invalid_range(self.min, self.max));
        }
        Ok((lo as i64, hi as i64))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(GeneratorError::invalid_range(self.min, self.max));
        }
        if self.rounded {
            self.integer_bounds()?;
        }
        Ok(())
    }
}

/// Forced letter case for generated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Upper,
    Lower,
}

impl FromStr for Casing {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Ok(Casing::Upper),
            "lower" => Ok(Casing::Lower),
            _ => Err(GeneratorError::InvalidCasing(s.to_string())),
        }
    }
}

impl Casing {
    /// Parse an optional casing where the empty string means "leave as is".
    pub fn parse_optional(s: &str) -> Result<Option<Self>> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }

    pub fn apply(self, s: &str) -> String {
        match self {
            Casing::Upper => s.to_uppercase(),
            Casing::Lower => s.to_lowercase(),
        }
    }
}

fn deserialize_casing<'de, D>(deserializer: D) -> std::result::Result<Option<Casing>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) => Casing::parse_optional(&s).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Configuration for random strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StringConfig {
    /// Minimum length in characters (inclusive)
    pub min_length: usize,
    /// Maximum length in characters (inclusive)
    pub max_length: usize,
    /// Allow printable symbols and digits, not only letters
    pub allow_non_letters: bool,
    /// Forced case applied after generation
    #[serde(deserialize_with = "deserialize_casing")]
    pub casing: Option<Casing>,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 12,
            allow_non_letters: true,
            casing: None,
        }
    }
}

impl StringConfig {
    /// Letters only, with the given length bounds.
    pub fn letters(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            allow_non_letters: false,
            casing: None,
        }
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = Some(casing);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(GeneratorError::invalid_range(
                self.min_length,
                self.max_length,
            ));
        }
        Ok(())
    }
}

/// Configuration for random booleans.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BooleanConfig {
    /// Probability of `true`, in percent. 50 when unset.
    pub weight_percent: Option<f64>,
}

impl BooleanConfig {
    pub fn weighted(weight_percent: f64) -> Self {
        Self {
            weight_percent: Some(weight_percent),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.weight_percent {
            Some(w) if !(0.0..=100.0).contains(&w) => Err(GeneratorError::InvalidWeight(w)),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Shape Overrides
// ============================================================================

/// Caller-supplied partial shape for an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Skeleton {
    /// Keys to create; their values are randomized.
    Keys(Vec<String>),
    /// Keys with fixed values, kept verbatim; more keys are added around them.
    Partial(BTreeMap<String, Value>),
}

impl Skeleton {
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Number of keys the skeleton fixes.
    pub fn fixed_key_count(&self) -> usize {
        match self {
            Self::Keys(keys) => keys.len(),
            Self::Partial(map) => map.len(),
        }
    }
}

impl TryFrom<Value> for Skeleton {
    type Error = GeneratorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(key) => Ok(key),
                    other => Err(GeneratorError::InvalidSkeletonKey(
                        other.type_name().to_string(),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(Skeleton::Keys),
            Value::Object(map) => Ok(Skeleton::Partial(map)),
            other => Err(GeneratorError::InvalidSkeletonType(
                other.type_name().to_string(),
            )),
        }
    }
}

/// Custom source for appended array slots.
#[derive(Clone)]
pub enum ValueGenerator {
    /// Every slot receives a copy of this value.
    Fixed(Value),
    /// Every slot receives the result of one call.
    Call(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl ValueGenerator {
    pub fn call<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Call(Arc::new(f))
    }

    pub fn produce(&self) -> Value {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Call(f) => f(),
        }
    }
}

impl fmt::Debug for ValueGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Call(_) => f.write_str("Call(<fn>)"),
        }
    }
}

impl<'de> Deserialize<'de> for ValueGenerator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ValueGenerator::Fixed)
    }
}

fn validate_preference(preference: &Option<Vec<Kind>>) -> Result<()> {
    match preference {
        Some(kinds) if kinds.is_empty() => Err(GeneratorError::EmptyPreference),
        _ => Ok(()),
    }
}

/// Reject anything but a mapping (or null, meaning defaults) as a config document.
fn config_document(value: &Value, what: &str) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Object(Default::default())),
        Value::Object(_) => Ok(value.clone().into()),
        other => Err(GeneratorError::InvalidArgumentType(format!(
            "{what} configuration must be an object, got {}",
            other.type_name()
        ))),
    }
}

fn expect_array_field(doc: &serde_json::Value, field: &str) -> Result<()> {
    match doc.get(field) {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Array(_)) => Ok(()),
        Some(other) => Err(GeneratorError::InvalidArgumentType(format!(
            "{field} must be an array, got {}",
            Value::from(other.clone()).type_name()
        ))),
    }
}

fn decode_document<T: for<'de> Deserialize<'de>>(doc: serde_json::Value) -> Result<T> {
    serde_json::from_value(doc).map_err(|e| GeneratorError::InvalidArgumentType(e.to_string()))
}

// ============================================================================
// Composite Configs
// ============================================================================

/// Configuration for random objects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Exact number of keys. Drawn from the min/max range when unset.
    pub key_val_pairs: Option<usize>,
    /// Optional fixed shape
    pub skeleton: Option<Skeleton>,
    /// Kinds allowed for randomly chosen values
    pub value_preference: Option<Vec<Kind>>,
    /// Minimum key count when no exact count is given
    pub min_key_val_pairs: usize,
    /// Maximum key count when no exact count is given
    pub max_key_val_pairs: usize,
    /// Maximum levels of nested objects/arrays
    pub max_depth: usize,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            key_val_pairs: None,
            skeleton: None,
            value_preference: None,
            min_key_val_pairs: 2,
            max_key_val_pairs: 6,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ObjectConfig {
    /// Object with exactly `n` keys.
    pub fn with_keys(n: usize) -> Self {
        Self {
            key_val_pairs: Some(n),
            ..Self::default()
        }
    }

    pub fn skeleton(mut self, skeleton: Skeleton) -> Self {
        self.skeleton = Some(skeleton);
        self
    }

    pub fn prefer(mut self, kinds: impl Into<Vec<Kind>>) -> Self {
        self.value_preference = Some(kinds.into());
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a dynamic configuration document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut doc = config_document(value, "object")?;
        expect_array_field(&doc, "value_preference")?;
        // Checked up front so skeleton mistakes keep their own error kinds.
        let skeleton = match doc.as_object_mut().and_then(|m| m.remove("skeleton")) {
            None | Some(serde_json::Value::Null) => None,
            Some(raw) => Some(Skeleton::try_from(Value::from(raw))?),
        };
        let mut config: Self = decode_document(doc)?;
        config.skeleton = skeleton;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_key_val_pairs > self.max_key_val_pairs {
            return Err(GeneratorError::invalid_range(
                self.min_key_val_pairs,
                self.max_key_val_pairs,
            ));
        }
        validate_preference(&self.value_preference)?;

        let Some(skeleton) = &self.skeleton else {
            return Ok(());
        };
        let existing = skeleton.fixed_key_count();
        let (requested, over_budget) = match (skeleton, self.key_val_pairs) {
            (Skeleton::Partial(_), Some(requested)) => (requested, requested <= existing),
            (Skeleton::Keys(_), Some(requested)) => (requested, requested < existing),
            // Without an exact count the size is drawn up to the maximum.
            (Skeleton::Partial(_), None) => (
                self.max_key_val_pairs,
                self.max_key_val_pairs <= existing,
            ),
            (Skeleton::Keys(_), None) => return Ok(()),
        };
        if over_budget {
            return Err(GeneratorError::InsufficientKeyBudget {
                requested,
                existing,
            });
        }
        Ok(())
    }

    /// Key count range for a partial skeleton without an exact count.
    ///
    /// At least one key is always added around the fixed ones.
    pub fn partial_size_range(&self, existing: usize) -> std::ops::RangeInclusive<usize> {
        self.min_key_val_pairs.max(existing + 1)..=self.max_key_val_pairs
    }
}

/// Configuration for random arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Exact length. Drawn from the min/max range when unset.
    pub set_length: Option<usize>,
    /// Minimum length when no exact length is given
    pub min_length: usize,
    /// Maximum length when no exact length is given
    pub max_length: usize,
    /// Kinds allowed for appended elements
    pub value_kinds: Option<Vec<Kind>>,
    /// Leading elements kept verbatim
    pub template_array: Vec<Value>,
    /// Overrides kind selection for appended elements
    pub value_generator: Option<ValueGenerator>,
    /// Maximum levels of nested objects/arrays
    pub max_depth: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            set_length: None,
            min_length: 0,
            max_length: 5,
            value_kinds: None,
            template_array: Vec::new(),
            value_generator: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ArrayConfig {
    /// Array with exactly `n` elements.
    pub fn with_length(n: usize) -> Self {
        Self {
            set_length: Some(n),
            ..Self::default()
        }
    }

    pub fn template(mut self, template: Vec<Value>) -> Self {
        self.template_array = template;
        self
    }

    pub fn kinds(mut self, kinds: impl Into<Vec<Kind>>) -> Self {
        self.value_kinds = Some(kinds.into());
        self
    }

    pub fn generator(mut self, generator: ValueGenerator) -> Self {
        self.value_generator = Some(generator);
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a dynamic configuration document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let doc = config_document(value, "array")?;
        expect_array_field(&doc, "value_kinds")?;
        expect_array_field(&doc, "template_array")?;
        decode_document(doc)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(GeneratorError::invalid_range(
                self.min_length,
                self.max_length,
            ));
        }
        validate_preference(&self.value_kinds)?;

        let template = self.template_array.len();
        let limit = self.set_length.unwrap_or(self.max_length);
        if template > limit {
            return Err(GeneratorError::TemplateTooLong { template, limit });
        }
        Ok(())
    }

    /// Length range when no exact length is set. Never shorter than the template.
    pub fn length_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_length.max(self.template_array.len())..=self.max_length
    }
}

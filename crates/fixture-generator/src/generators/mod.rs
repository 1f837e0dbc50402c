//! Primitive value generators.
//!
//! The composite builder never draws numbers, strings or booleans itself; it
//! asks a [`PrimitiveProvider`] for them. [`Primitives`] is the default
//! provider, backed by the bounded-random functions in the submodules.

pub mod boolean;
pub mod number;
pub mod string;

use fixture_core::{BooleanConfig, Casing, NumberConfig, Result, StringConfig, Value};
use rand::Rng;

pub use boolean::generate_boolean;
pub use number::generate_number;
pub use string::{character_gen, enforce_case, generate_string, is_non_letter_code};

/// Source of primitive values and object keys for the composite builder.
pub trait PrimitiveProvider {
    /// Generate a number slot value.
    fn number<R: Rng>(&self, rng: &mut R) -> Result<Value>;

    /// Generate a string slot value.
    fn string<R: Rng>(&self, rng: &mut R) -> Result<Value>;

    /// Generate a boolean slot value.
    fn boolean<R: Rng>(&self, rng: &mut R) -> Result<Value>;

    /// Generate a candidate object key. Uniqueness is the caller's concern.
    fn key<R: Rng>(&self, rng: &mut R) -> Result<String>;
}

/// Default provider: one config per primitive kind plus one for keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitives {
    pub number: NumberConfig,
    pub string: StringConfig,
    pub boolean: BooleanConfig,
    pub key: StringConfig,
}

impl Default for Primitives {
    fn default() -> Self {
        Self {
            number: NumberConfig::default(),
            string: StringConfig::default(),
            boolean: BooleanConfig::default(),
            key: StringConfig::letters(4, 6).with_casing(Casing::Lower),
        }
    }
}

impl Primitives {
    pub fn validate(&self) -> Result<()> {
        self.number.validate()?;
        self.string.validate()?;
        self.boolean.validate()?;
        self.key.validate()
    }
}

impl PrimitiveProvider for Primitives {
    fn number<R: Rng>(&self, rng: &mut R) -> Result<Value> {
        generate_number(rng, &self.number)
    }

    fn string<R: Rng>(&self, rng: &mut R) -> Result<Value> {
        generate_string(rng, &self.string).map(Value::String)
    }

    fn boolean<R: Rng>(&self, rng: &mut R) -> Result<Value> {
        generate_boolean(rng, &self.boolean).map(Value::Bool)
    }

    fn key<R: Rng>(&self, rng: &mut R) -> Result<String> {
        generate_string(rng, &self.key)
    }
}

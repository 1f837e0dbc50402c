//! fixture-gen
//!
//! Randomized, structurally plausible values for test fixtures: numbers,
//! strings and booleans, plus objects and arrays nested up to a bounded
//! depth, optionally pinned to a caller-supplied shape.
//!
//! # Crates
//!
//! - `fixture_core` - Kinds, values, configuration, errors, fixture schemas
//! - `fixture_generator` - Primitives, kind selection, depth-bounded composite builder
//!
//! This crate adds free functions that draw from the thread-local random
//! source. Use [`FixtureGenerator`] when output must be reproducible.
//!
//! # Usage
//!
//! ```rust
//! use fixture_gen::{generate_array, generate_object, ArrayConfig, ObjectConfig, Skeleton, Value};
//!
//! // Exactly five keys, two of them fixed
//! let config = ObjectConfig::with_keys(5).skeleton(Skeleton::keys(["id", "email"]));
//! let user = generate_object(&config).unwrap();
//! assert_eq!(user.as_object().unwrap().len(), 5);
//!
//! // Array starting with 1, 2, 5
//! let config = ArrayConfig { max_length: 8, ..ArrayConfig::default() }
//!     .template(vec![Value::Int(1), Value::Int(2), Value::Int(5)]);
//! let numbers = generate_array(&config).unwrap();
//! assert_eq!(numbers.as_array().unwrap()[..3], [Value::Int(1), Value::Int(2), Value::Int(5)]);
//! ```

mod facade;

pub use facade::{
    character_gen, enforce_case, generate_array, generate_array_from, generate_boolean,
    generate_number, generate_object, generate_object_from, generate_string, is_non_letter_code,
    random_kind, random_of_kind, random_of_kind_names,
};

pub use fixture_core::{
    ArrayConfig, BooleanConfig, Casing, FixtureDefinition, FixtureSchema, FixtureSpec,
    GeneratorError, Kind, NumberConfig, ObjectConfig, Result, SchemaError, Skeleton,
    StringConfig, Value, ValueGenerator, ALL_KINDS, DEFAULT_MAX_DEPTH, PRIMITIVE_KINDS,
};
pub use fixture_generator::{FixtureGenerator, FixtureIterator, PrimitiveProvider, Primitives};

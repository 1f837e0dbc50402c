//! Core types for the fixture-gen synthetic data generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the public facade:
//!
//! - [`Kind`] - Closed tag for the five value kinds
//! - [`Value`] - Generated value tree (converts to and from JSON/YAML)
//! - [`GeneratorError`] - Error taxonomy for invalid configuration
//! - [`ObjectConfig`], [`ArrayConfig`] and friends - Explicit per-operation configuration
//! - [`FixtureSchema`] - Named fixtures loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    └─── fixture-generator  (primitives, type selection, composite builder)
//!            │
//!            └─── fixture-gen  (free-function facade)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{ObjectConfig, Skeleton, Value};
//!
//! let config = ObjectConfig::with_keys(4).skeleton(Skeleton::keys(["id", "email"]));
//! assert!(config.validate().is_ok());
//!
//! let value: Value = serde_json::json!({"id": 1}).into();
//! assert_eq!(value.nesting_depth(), 0);
//! ```

pub mod config;
pub mod error;
pub mod kind;
pub mod schema;
pub mod value;

// Re-exports for convenience
pub use config::{
    ArrayConfig, BooleanConfig, Casing, NumberConfig, ObjectConfig, Skeleton, StringConfig,
    ValueGenerator, DEFAULT_MAX_DEPTH,
};
pub use error::{GeneratorError, Result};
pub use kind::{Kind, ALL_KINDS, PRIMITIVE_KINDS};
pub use schema::{FixtureDefinition, FixtureSchema, FixtureSpec, SchemaError};
pub use value::Value;

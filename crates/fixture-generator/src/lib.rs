//! Random value generator for fixture-gen.
//!
//! This crate turns the configuration types of `fixture-core` into values.
//! Every entry point is generic over the random source, and
//! [`FixtureGenerator`] wraps a seeded `StdRng` for reproducible output.
//!
//! # Architecture
//!
//! ```text
//! ObjectConfig / ArrayConfig
//!        │  validate()
//!        ▼
//! ┌──────────────────┐
//! │    overrides     │  skeletons, template prefixes, value generators
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐      ┌────────────┐
//! │ CompositeBuilder │ ───▶ │  selector  │  uniform kind choice
//! │  depth-bounded   │      └────────────┘
//! └────────┬─────────┘
//!          ▼
//!   PrimitiveProvider   number / string / boolean / key
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{ObjectConfig, Skeleton};
//! use fixture_generator::FixtureGenerator;
//!
//! let mut generator = FixtureGenerator::new(42);
//! let config = ObjectConfig::with_keys(3).skeleton(Skeleton::keys(["id"]));
//! let user = generator.object(&config).unwrap();
//! assert_eq!(user.as_object().unwrap().len(), 3);
//! ```

pub mod composite;
pub mod generator;
pub mod generators;
pub mod overrides;
pub mod selector;

// Re-exports for convenience
pub use composite::{CompositeBuilder, KEY_RETRY_LIMIT};
pub use generator::{
    generate_array, generate_kind, generate_object, generate_spec, random_of_kind,
    FixtureGenerator, FixtureIterator,
};
pub use generators::{PrimitiveProvider, Primitives};
pub use selector::{choose_kind, random_kind};

//! Depth-bounded composite builder.
//!
//! Objects and arrays are filled one slot at a time. Each slot gets a kind
//! from the selector; composite kinds recurse into a fresh node one level
//! deeper, primitive kinds go to the [`PrimitiveProvider`].
//!
//! The root node sits at depth 0. A node at depth `d` may only hold
//! composites while `d < max_depth`, so no generated value nests more than
//! `max_depth` levels and recursion always terminates.

use crate::generators::PrimitiveProvider;
use crate::selector::{choose_kind, primitive_fallback};
use fixture_core::{GeneratorError, Kind, Result, Value};
use rand::Rng;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Key count of a randomly nested object.
pub const NESTED_OBJECT_KEYS: RangeInclusive<usize> = 1..=5;

/// Length of a randomly nested array.
pub const NESTED_ARRAY_LENGTH: RangeInclusive<usize> = 0..=4;

/// Attempts at a fresh key before giving up on a slot.
pub const KEY_RETRY_LIMIT: usize = 64;

/// Fills objects and arrays for one generation request.
///
/// `max_depth` counts nested composite levels below the root, so
/// `max_depth = 3` allows at most three levels of nesting. This is one level
/// less than a limit that only stops once the depth exceeds `max_depth`.
///
/// The builder borrows the request's random source and provider; it holds
/// no state between slots besides those borrows.
pub struct CompositeBuilder<'a, R: Rng, P: PrimitiveProvider> {
    rng: &'a mut R,
    primitives: &'a P,
    max_depth: usize,
    preference: &'a [Kind],
    fallback: Vec<Kind>,
}

impl<'a, R: Rng, P: PrimitiveProvider> CompositeBuilder<'a, R, P> {
    /// Create a builder allowing every kind.
    pub fn new(rng: &'a mut R, primitives: &'a P, max_depth: usize) -> Self {
        Self {
            rng,
            primitives,
            max_depth,
            preference: &[],
            fallback: primitive_fallback(&[]),
        }
    }

    /// Restrict randomly chosen slots to `kinds` (empty means every kind).
    pub fn with_preference(mut self, kinds: &'a [Kind]) -> Self {
        self.preference = kinds;
        self.fallback = primitive_fallback(kinds);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Draw a size uniformly from `range`.
    pub fn draw_size(&mut self, range: RangeInclusive<usize>) -> usize {
        self.rng.random_range(range)
    }

    /// Choose the kind for a slot of a node at `depth`.
    pub fn slot_kind(&mut self, depth: usize) -> Kind {
        if depth >= self.max_depth {
            tracing::trace!(depth, max_depth = self.max_depth, "forcing primitive slot");
            choose_kind(self.rng, &self.fallback)
        } else {
            choose_kind(self.rng, self.preference)
        }
    }

    /// Produce a random value for a slot of a node at `depth`.
    pub fn random_value(&mut self, depth: usize) -> Result<Value> {
        let kind = self.slot_kind(depth);
        self.value_of_kind(kind, depth)
    }

    /// Produce a value of `kind` for a slot of a node at `depth`.
    ///
    /// Composites become nested nodes at `depth + 1` with a fresh random size.
    pub fn value_of_kind(&mut self, kind: Kind, depth: usize) -> Result<Value> {
        match kind {
            Kind::Number => self.primitives.number(self.rng),
            Kind::String => self.primitives.string(self.rng),
            Kind::Boolean => self.primitives.boolean(self.rng),
            Kind::Object => {
                let target = self.draw_size(NESTED_OBJECT_KEYS);
                let mut node = BTreeMap::new();
                self.fill_object(&mut node, depth + 1, target)?;
                Ok(Value::Object(node))
            }
            Kind::Array => {
                let target = self.draw_size(NESTED_ARRAY_LENGTH);
                let mut node = Vec::with_capacity(target);
                self.fill_array(&mut node, depth + 1, target)?;
                Ok(Value::Array(node))
            }
        }
    }

    /// Add random entries to `node` until it holds `target` keys.
    ///
    /// Existing entries are never touched.
    pub fn fill_object(
        &mut self,
        node: &mut BTreeMap<String, Value>,
        depth: usize,
        target: usize,
    ) -> Result<()> {
        while node.len() < target {
            let key = self.fresh_key(node)?;
            let value = self.random_value(depth)?;
            node.insert(key, value);
        }
        Ok(())
    }

    /// Append random elements to `node` until it holds `target` elements.
    pub fn fill_array(&mut self, node: &mut Vec<Value>, depth: usize, target: usize) -> Result<()> {
        while node.len() < target {
            let value = self.random_value(depth)?;
            node.push(value);
        }
        Ok(())
    }

    /// Generate a key not yet present in `node`.
    pub fn fresh_key(&mut self, node: &BTreeMap<String, Value>) -> Result<String> {
        for attempt in 0..KEY_RETRY_LIMIT {
            let key = self.primitives.key(self.rng)?;
            if !node.contains_key(&key) {
                return Ok(key);
            }
            tracing::trace!(attempt, key = %key, "object key collision");
        }
        Err(GeneratorError::KeySpaceExhausted {
            attempts: KEY_RETRY_LIMIT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Primitives;
    use fixture_core::{StringConfig, ALL_KINDS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fill_object_exact_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 3);

        for target in [0, 1, 5, 20] {
            let mut node = BTreeMap::new();
            builder.fill_object(&mut node, 0, target).unwrap();
            assert_eq!(node.len(), target);
        }
    }

    #[test]
    fn test_fill_keeps_existing_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 3);

        let mut node = BTreeMap::from([("fixed".to_string(), Value::Int(1))]);
        builder.fill_object(&mut node, 0, 4).unwrap();
        assert_eq!(node.len(), 4);
        assert_eq!(node.get("fixed"), Some(&Value::Int(1)));

        let mut arr = vec![Value::from("head")];
        builder.fill_array(&mut arr, 0, 3).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0], Value::from("head"));
    }

    #[test]
    fn test_depth_never_exceeds_limit() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();

        for max_depth in 0..=4 {
            let mut builder = CompositeBuilder::new(&mut rng, &primitives, max_depth);
            for _ in 0..200 {
                let mut node = BTreeMap::new();
                builder.fill_object(&mut node, 0, 6).unwrap();
                assert!(Value::Object(node).nesting_depth() <= max_depth);
            }
        }
    }

    #[test]
    fn test_composite_only_preference_terminates() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let kinds = [Kind::Object];
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 2).with_preference(&kinds);

        let mut node = Vec::new();
        builder.fill_array(&mut node, 0, 10).unwrap();
        assert!(node.iter().all(|v| v.kind() == Some(Kind::Object)));
        assert!(Value::Array(node).nesting_depth() <= 2);
    }

    #[test]
    fn test_zero_depth_is_flat() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 0);

        let mut node = Vec::new();
        builder.fill_array(&mut node, 0, 50).unwrap();
        assert!(node.iter().all(|v| !v.is_composite()));
    }

    #[test]
    fn test_preference_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let kinds = [Kind::Boolean];
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 3).with_preference(&kinds);

        let mut node = BTreeMap::new();
        builder.fill_object(&mut node, 0, 10).unwrap();
        assert!(node.values().all(|v| v.kind() == Some(Kind::Boolean)));
    }

    #[test]
    fn test_nested_sizes() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 3);

        for _ in 0..100 {
            if let Value::Object(obj) = builder.value_of_kind(Kind::Object, 0).unwrap() {
                assert!(NESTED_OBJECT_KEYS.contains(&obj.len()));
            } else {
                panic!("Expected Object");
            }
            if let Value::Array(arr) = builder.value_of_kind(Kind::Array, 0).unwrap() {
                assert!(NESTED_ARRAY_LENGTH.contains(&arr.len()));
            } else {
                panic!("Expected Array");
            }
        }
    }

    #[test]
    fn test_key_space_exhausted() {
        let mut rng = StdRng::seed_from_u64(42);
        // Single lowercase letters: only 26 distinct keys exist.
        let primitives = Primitives {
            key: StringConfig::letters(1, 1).with_casing(fixture_core::Casing::Lower),
            ..Primitives::default()
        };
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 3);

        let mut node = BTreeMap::new();
        let result = builder.fill_object(&mut node, 0, 27);
        assert_eq!(
            result,
            Err(GeneratorError::KeySpaceExhausted {
                attempts: KEY_RETRY_LIMIT
            })
        );
        assert!(node.len() <= 26);
    }

    #[test]
    fn test_all_kinds_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let primitives = Primitives::default();
        let mut builder = CompositeBuilder::new(&mut rng, &primitives, 3);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(kind) = builder.random_value(0).unwrap().kind() {
                seen.insert(kind);
            }
        }
        assert_eq!(seen.len(), ALL_KINDS.len());
    }
}

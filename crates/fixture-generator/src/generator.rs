//! Request entry points and the seeded fixture generator.

use crate::composite::CompositeBuilder;
use crate::generators::{
    generate_boolean, generate_number, generate_string, PrimitiveProvider, Primitives,
};
use crate::overrides;
use crate::selector::{choose_kind, random_kind};
use fixture_core::{
    ArrayConfig, BooleanConfig, FixtureSchema, FixtureSpec, GeneratorError, Kind, NumberConfig,
    ObjectConfig, Result, StringConfig, Value,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate one object as described by `config`.
pub fn generate_object<R: Rng, P: PrimitiveProvider>(
    rng: &mut R,
    primitives: &P,
    config: &ObjectConfig,
) -> Result<Value> {
    config.validate()?;
    tracing::debug!(
        key_val_pairs = ?config.key_val_pairs,
        fixed_keys = config.skeleton.as_ref().map(|s| s.fixed_key_count()),
        max_depth = config.max_depth,
        "generating object"
    );

    let preference = config.value_preference.as_deref().unwrap_or(&[]);
    let mut builder =
        CompositeBuilder::new(rng, primitives, config.max_depth).with_preference(preference);
    overrides::build_object(&mut builder, config)
}

/// Generate one array as described by `config`.
pub fn generate_array<R: Rng, P: PrimitiveProvider>(
    rng: &mut R,
    primitives: &P,
    config: &ArrayConfig,
) -> Result<Value> {
    config.validate()?;
    tracing::debug!(
        set_length = ?config.set_length,
        template_len = config.template_array.len(),
        custom_generator = config.value_generator.is_some(),
        max_depth = config.max_depth,
        "generating array"
    );

    let kinds = config.value_kinds.as_deref().unwrap_or(&[]);
    let mut builder = CompositeBuilder::new(rng, primitives, config.max_depth).with_preference(kinds);
    overrides::build_array(&mut builder, config)
}

/// Generate one value of `kind`, using default configuration for composites.
pub fn generate_kind<R: Rng, P: PrimitiveProvider>(
    rng: &mut R,
    primitives: &P,
    kind: Kind,
) -> Result<Value> {
    match kind {
        Kind::Number => primitives.number(rng),
        Kind::String => primitives.string(rng),
        Kind::Boolean => primitives.boolean(rng),
        Kind::Object => generate_object(rng, primitives, &ObjectConfig::default()),
        Kind::Array => generate_array(rng, primitives, &ArrayConfig::default()),
    }
}

/// Generate one value of a kind picked uniformly from `kinds` (all when empty).
pub fn random_of_kind<R: Rng, P: PrimitiveProvider>(
    rng: &mut R,
    primitives: &P,
    kinds: &[Kind],
) -> Result<Value> {
    let kind = choose_kind(rng, kinds);
    tracing::debug!(%kind, "generating random value");
    generate_kind(rng, primitives, kind)
}

/// Generate one value for a fixture spec.
pub fn generate_spec<R: Rng, P: PrimitiveProvider>(
    rng: &mut R,
    primitives: &P,
    spec: &FixtureSpec,
) -> Result<Value> {
    match spec {
        FixtureSpec::Number(config) => generate_number(rng, config),
        FixtureSpec::String(config) => generate_string(rng, config).map(Value::String),
        FixtureSpec::Boolean(config) => generate_boolean(rng, config).map(Value::Bool),
        FixtureSpec::Object(config) => generate_object(rng, primitives, config),
        FixtureSpec::Array(config) => generate_array(rng, primitives, config),
        FixtureSpec::Random(kinds) => random_of_kind(rng, primitives, kinds),
    }
}

/// Generator with its own seeded random source.
///
/// Two generators built with the same seed produce the same values for the
/// same sequence of calls.
pub struct FixtureGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Provider for primitive slot values and keys
    primitives: Primitives,
    /// Named fixtures, if loaded from a schema
    schema: Option<FixtureSchema>,
}

impl FixtureGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            primitives: Primitives::default(),
            schema: None,
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            primitives: Primitives::default(),
            schema: None,
        }
    }

    /// Create a generator for the fixtures in `schema`.
    ///
    /// `seed` overrides the schema's own seed; with neither, the generator is
    /// seeded from the operating system.
    pub fn from_schema(schema: FixtureSchema, seed: Option<u64>) -> Self {
        let mut generator = match seed.or(schema.seed) {
            Some(seed) => Self::new(seed),
            None => Self::from_os_rng(),
        };
        generator.schema = Some(schema);
        generator
    }

    /// Replace the primitive slot configuration.
    pub fn with_primitives(mut self, primitives: Primitives) -> Result<Self> {
        primitives.validate()?;
        self.primitives = primitives;
        Ok(self)
    }

    pub fn primitives(&self) -> &Primitives {
        &self.primitives
    }

    pub fn schema(&self) -> Option<&FixtureSchema> {
        self.schema.as_ref()
    }

    pub fn number(&mut self, config: &NumberConfig) -> Result<Value> {
        generate_number(&mut self.rng, config)
    }

    pub fn string(&mut self, config: &StringConfig) -> Result<String> {
        generate_string(&mut self.rng, config)
    }

    pub fn boolean(&mut self, config: &BooleanConfig) -> Result<bool> {
        generate_boolean(&mut self.rng, config)
    }

    pub fn object(&mut self, config: &ObjectConfig) -> Result<Value> {
        generate_object(&mut self.rng, &self.primitives, config)
    }

    pub fn array(&mut self, config: &ArrayConfig) -> Result<Value> {
        generate_array(&mut self.rng, &self.primitives, config)
    }

    /// One value of a kind picked from `kinds` (all kinds when empty).
    pub fn random_of_kind(&mut self, kinds: &[Kind]) -> Result<Value> {
        random_of_kind(&mut self.rng, &self.primitives, kinds)
    }

    /// A uniformly chosen kind.
    pub fn random_kind(&mut self) -> Kind {
        random_kind(&mut self.rng)
    }

    /// Generate one value for the named fixture.
    pub fn generate_fixture(&mut self, name: &str) -> Result<Value> {
        let Self {
            rng,
            primitives,
            schema,
        } = self;
        let fixture = schema
            .as_ref()
            .and_then(|s| s.get_fixture(name))
            .ok_or_else(|| GeneratorError::FixtureNotFound(name.to_string()))?;

        tracing::debug!(fixture = name, "generating fixture");
        generate_spec(rng, &*primitives, &fixture.spec)
    }

    /// Generate `count` values for the named fixture.
    ///
    /// Returns an iterator that lazily generates values.
    pub fn fixtures(&mut self, name: &str, count: usize) -> Result<FixtureIterator<'_>> {
        // Verify the fixture exists
        if self
            .schema
            .as_ref()
            .and_then(|s| s.get_fixture(name))
            .is_none()
        {
            return Err(GeneratorError::FixtureNotFound(name.to_string()));
        }

        Ok(FixtureIterator {
            generator: self,
            name: name.to_string(),
            remaining: count,
        })
    }
}

/// Iterator that lazily generates fixture values.
pub struct FixtureIterator<'a> {
    generator: &'a mut FixtureGenerator,
    name: String,
    remaining: usize,
}

impl Iterator for FixtureIterator<'_> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_fixture(&self.name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FixtureIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::{Skeleton, ValueGenerator};
    use serde_json::json;

    fn test_schema() -> FixtureSchema {
        let yaml = r#"
version: 1
seed: 42

fixtures:
  - name: user
    object:
      key_val_pairs: 4
      skeleton: [id, email]

  - name: settings
    object:
      key_val_pairs: 3
      skeleton:
        theme: dark

  - name: scores
    array:
      set_length: 5
      value_kinds: [number]

  - name: flag
    boolean:
      weight_percent: 100

  - name: anything
    random: []
"#;
        FixtureSchema::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_object_exact_keys() {
        let mut generator = FixtureGenerator::new(42);
        for n in [1, 5, 20] {
            let value = generator.object(&ObjectConfig::with_keys(n)).unwrap();
            assert_eq!(value.as_object().unwrap().len(), n);
        }
    }

    #[test]
    fn test_object_default_range() {
        let mut generator = FixtureGenerator::new(42);
        for _ in 0..100 {
            let value = generator.object(&ObjectConfig::default()).unwrap();
            let len = value.as_object().unwrap().len();
            assert!((2..=6).contains(&len));
            assert!(value.nesting_depth() <= 3);
        }
    }

    #[test]
    fn test_object_insufficient_budget() {
        let mut generator = FixtureGenerator::new(42);
        let skeleton = Skeleton::try_from(Value::from(json!({"a": 1, "b": 2, "c": 3}))).unwrap();
        let result = generator.object(&ObjectConfig::with_keys(2).skeleton(skeleton));
        assert_eq!(
            result,
            Err(GeneratorError::InsufficientKeyBudget {
                requested: 2,
                existing: 3
            })
        );
    }

    #[test]
    fn test_array_exact_length() {
        let mut generator = FixtureGenerator::new(42);
        for n in [0, 1, 7, 30] {
            let value = generator.array(&ArrayConfig::with_length(n)).unwrap();
            assert_eq!(value.as_array().unwrap().len(), n);
        }
    }

    #[test]
    fn test_array_fixed_value_generator() {
        let mut generator = FixtureGenerator::new(42);
        let config = ArrayConfig {
            min_length: 2,
            ..ArrayConfig::default()
        }
        .generator(ValueGenerator::Fixed(Value::from("x")));

        let value = generator.array(&config).unwrap();
        let arr = value.as_array().unwrap();
        assert!(arr.len() >= 2);
        assert!(arr.iter().all(|v| v == &Value::from("x")));
    }

    #[test]
    fn test_random_of_kind() {
        let mut generator = FixtureGenerator::new(42);
        for _ in 0..50 {
            let value = generator.random_of_kind(&[Kind::String, Kind::Array]).unwrap();
            assert!(matches!(value.kind(), Some(Kind::String) | Some(Kind::Array)));
        }
        let object = generator.random_of_kind(&[Kind::Object]).unwrap();
        assert!((2..=6).contains(&object.as_object().unwrap().len()));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = FixtureGenerator::new(42);
        let mut gen2 = FixtureGenerator::new(42);

        let config = ObjectConfig::with_keys(8);
        assert_eq!(gen1.object(&config).unwrap(), gen2.object(&config).unwrap());
        assert_eq!(
            gen1.array(&ArrayConfig::default()).unwrap(),
            gen2.array(&ArrayConfig::default()).unwrap()
        );
        assert_eq!(gen1.random_kind(), gen2.random_kind());
    }

    #[test]
    fn test_generate_fixture() {
        let mut generator = FixtureGenerator::from_schema(test_schema(), None);

        let user = generator.generate_fixture("user").unwrap();
        let user = user.as_object().unwrap();
        assert_eq!(user.len(), 4);
        assert!(user.contains_key("id") && user.contains_key("email"));

        let settings = generator.generate_fixture("settings").unwrap();
        assert_eq!(
            settings.as_object().unwrap().get("theme"),
            Some(&Value::from("dark"))
        );

        let scores = generator.generate_fixture("scores").unwrap();
        let scores = scores.as_array().unwrap();
        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|v| v.kind() == Some(Kind::Number)));

        assert_eq!(generator.generate_fixture("flag").unwrap(), Value::Bool(true));
        assert!(generator.generate_fixture("anything").unwrap().kind().is_some());
    }

    #[test]
    fn test_schema_seed_is_deterministic() {
        let mut gen1 = FixtureGenerator::from_schema(test_schema(), None);
        let mut gen2 = FixtureGenerator::from_schema(test_schema(), Some(42));
        assert_eq!(
            gen1.generate_fixture("user").unwrap(),
            gen2.generate_fixture("user").unwrap()
        );
    }

    #[test]
    fn test_fixture_not_found() {
        let mut generator = FixtureGenerator::from_schema(test_schema(), None);
        assert_eq!(
            generator.generate_fixture("nonexistent"),
            Err(GeneratorError::FixtureNotFound("nonexistent".to_string()))
        );
        assert!(generator.fixtures("nonexistent", 3).is_err());

        let mut bare = FixtureGenerator::new(1);
        assert!(bare.generate_fixture("user").is_err());
    }

    #[test]
    fn test_fixture_iterator() {
        let mut generator = FixtureGenerator::from_schema(test_schema(), None);

        let mut iter = generator.fixtures("scores", 10).unwrap();
        assert_eq!(iter.len(), 10);
        iter.next().unwrap().unwrap();
        assert_eq!(iter.size_hint(), (9, Some(9)));
        let values: Vec<Value> = iter.collect::<Result<_>>().unwrap();
        assert_eq!(values.len(), 9);
    }

    #[test]
    fn test_custom_primitives() {
        let primitives = Primitives {
            number: NumberConfig::range(1, 1),
            ..Primitives::default()
        };
        let mut generator = FixtureGenerator::new(42).with_primitives(primitives).unwrap();
        let value = generator
            .array(&ArrayConfig::with_length(4).kinds([Kind::Number]))
            .unwrap();
        assert_eq!(value, Value::Array(vec![Value::Int(1); 4]));

        let invalid = Primitives {
            number: NumberConfig::range(5, 1),
            ..Primitives::default()
        };
        assert!(FixtureGenerator::new(42).with_primitives(invalid).is_err());
    }
}

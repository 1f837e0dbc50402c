//! Shape overrides: skeletons, template prefixes and custom value generators.
//!
//! These decide which slots of the top-level composite are fixed by the
//! caller. Whatever is left is handed to the [`CompositeBuilder`].

use crate::composite::CompositeBuilder;
use crate::generators::PrimitiveProvider;
use fixture_core::{ArrayConfig, ObjectConfig, Result, Skeleton, Value, ValueGenerator};
use rand::Rng;
use std::collections::BTreeMap;

/// Build the top-level object described by `config`.
///
/// `config` must already be validated.
pub fn build_object<R: Rng, P: PrimitiveProvider>(
    builder: &mut CompositeBuilder<'_, R, P>,
    config: &ObjectConfig,
) -> Result<Value> {
    let node = match &config.skeleton {
        None => {
            let target = object_target(builder, config);
            let mut node = BTreeMap::new();
            builder.fill_object(&mut node, 0, target)?;
            node
        }
        Some(Skeleton::Keys(keys)) => apply_key_skeleton(builder, keys, config.key_val_pairs)?,
        Some(Skeleton::Partial(fixed)) => {
            let target = config.key_val_pairs.unwrap_or_else(|| {
                builder.draw_size(config.partial_size_range(fixed.len()))
            });
            apply_partial_skeleton(builder, fixed, target)?
        }
    };
    Ok(Value::Object(node))
}

fn object_target<R: Rng, P: PrimitiveProvider>(
    builder: &mut CompositeBuilder<'_, R, P>,
    config: &ObjectConfig,
) -> usize {
    config.key_val_pairs.unwrap_or_else(|| {
        builder.draw_size(config.min_key_val_pairs..=config.max_key_val_pairs)
    })
}

/// Create one entry per listed key with a randomly chosen value.
///
/// When `key_val_pairs` is given, random keys are added after the listed
/// ones until the object holds that many.
pub fn apply_key_skeleton<R: Rng, P: PrimitiveProvider>(
    builder: &mut CompositeBuilder<'_, R, P>,
    keys: &[String],
    key_val_pairs: Option<usize>,
) -> Result<BTreeMap<String, Value>> {
    let mut node = BTreeMap::new();
    for key in keys {
        // Slots of the root node: composites start at depth 1.
        let value = builder.random_value(0)?;
        node.insert(key.clone(), value);
    }
    if let Some(target) = key_val_pairs {
        builder.fill_object(&mut node, 0, target)?;
    }
    Ok(node)
}

/// Keep the fixed entries verbatim and add random ones up to `target` keys.
pub fn apply_partial_skeleton<R: Rng, P: PrimitiveProvider>(
    builder: &mut CompositeBuilder<'_, R, P>,
    fixed: &BTreeMap<String, Value>,
    target: usize,
) -> Result<BTreeMap<String, Value>> {
    let mut node = fixed.clone();
    builder.fill_object(&mut node, 0, target)?;
    Ok(node)
}

/// Build the top-level array described by `config`.
///
/// Template elements lead verbatim. `config` must already be validated, so
/// the template never exceeds the target.
pub fn build_array<R: Rng, P: PrimitiveProvider>(
    builder: &mut CompositeBuilder<'_, R, P>,
    config: &ArrayConfig,
) -> Result<Value> {
    let target = config
        .set_length
        .unwrap_or_else(|| builder.draw_size(config.length_range()));

    let mut node = Vec::with_capacity(target);
    node.extend(config.template_array.iter().cloned());

    match &config.value_generator {
        Some(generator) => apply_value_generator(&mut node, generator, target),
        None => builder.fill_array(&mut node, 0, target)?,
    }
    Ok(Value::Array(node))
}

/// Append values from `generator` until `node` holds `target` elements.
pub fn apply_value_generator(node: &mut Vec<Value>, generator: &ValueGenerator, target: usize) {
    while node.len() < target {
        node.push(generator.produce());
    }
}

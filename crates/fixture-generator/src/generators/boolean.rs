//! Weighted boolean generator.

use fixture_core::{BooleanConfig, Result};
use rand::Rng;

const DEFAULT_WEIGHT_PERCENT: f64 = 50.0;

/// Generate `true` with probability `weight_percent / 100`.
pub fn generate_boolean<R: Rng>(rng: &mut R, config: &BooleanConfig) -> Result<bool> {
    config.validate()?;
    let weight = config.weight_percent.unwrap_or(DEFAULT_WEIGHT_PERCENT);
    Ok(rng.random_bool(weight / 100.0))
}

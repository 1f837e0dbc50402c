//! Numeric value generators.

use fixture_core::{NumberConfig, Result, Value};
use rand::Rng;

/// Generate a random number in `min..=max`.
///
/// Integral unless `rounded` is false, in which case the value is drawn from
/// the continuous closed interval. Rounded draws use the integers inside the
/// bounds, so `0.5..=2.5` yields 1 or 2.
pub fn generate_number<R: Rng>(rng: &mut R, config: &NumberConfig) -> Result<Value> {
    config.validate()?;
    if config.rounded {
        let (lo, hi) = config.integer_bounds()?;
        Ok(Value::Int(rng.random_range(lo..=hi)))
    } else {
        Ok(Value::Float(rng.random_range(config.min..=config.max)))
    }
}

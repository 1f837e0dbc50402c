//! Free-function entry points backed by the thread-local random source.

use fixture_core::{
    ArrayConfig, BooleanConfig, Kind, NumberConfig, ObjectConfig, Result, StringConfig, Value,
};
use fixture_generator::generators::{self, string};
use fixture_generator::{selector, Primitives};

/// Random number; integral unless `config.rounded` is false.
pub fn generate_number(config: &NumberConfig) -> Result<Value> {
    generators::generate_number(&mut rand::rng(), config)
}

/// Random string; defaults to 4 to 12 printable characters.
pub fn generate_string(config: &StringConfig) -> Result<String> {
    generators::generate_string(&mut rand::rng(), config)
}

/// Random boolean; `true` with probability `weight_percent / 100` (default 50).
pub fn generate_boolean(config: &BooleanConfig) -> Result<bool> {
    generators::generate_boolean(&mut rand::rng(), config)
}

/// Random object; 2 to 6 keys and at most 3 nesting levels by default.
pub fn generate_object(config: &ObjectConfig) -> Result<Value> {
    fixture_generator::generate_object(&mut rand::rng(), &Primitives::default(), config)
}

/// Random object from a dynamic configuration document.
pub fn generate_object_from(config: &Value) -> Result<Value> {
    generate_object(&ObjectConfig::from_value(config)?)
}

/// Random array; 0 to 5 elements and at most 3 nesting levels by default.
pub fn generate_array(config: &ArrayConfig) -> Result<Value> {
    fixture_generator::generate_array(&mut rand::rng(), &Primitives::default(), config)
}

/// Random array from a dynamic configuration document.
pub fn generate_array_from(config: &Value) -> Result<Value> {
    generate_array(&ArrayConfig::from_value(config)?)
}

/// One value of a kind chosen uniformly from `kinds` (every kind when empty).
pub fn random_of_kind(kinds: &[Kind]) -> Result<Value> {
    fixture_generator::random_of_kind(&mut rand::rng(), &Primitives::default(), kinds)
}

/// Like [`random_of_kind`], with kinds given by name.
pub fn random_of_kind_names(names: &[&str]) -> Result<Value> {
    let kinds = names
        .iter()
        .map(|name| name.parse::<Kind>())
        .collect::<Result<Vec<_>>>()?;
    random_of_kind(&kinds)
}

/// A uniformly chosen kind.
pub fn random_kind() -> Kind {
    selector::random_kind(&mut rand::rng())
}

/// One character with a code in `min_code..max_code`, never a backslash.
pub fn character_gen(min_code: u32, max_code: u32, allow_non_letters: bool) -> Result<char> {
    string::character_gen(&mut rand::rng(), min_code, max_code, allow_non_letters)
}

pub fn is_non_letter_code(code: u32) -> bool {
    string::is_non_letter_code(code)
}

/// Force `s` to `upper` or `lower` case.
pub fn enforce_case(s: &str, casing: &str) -> Result<String> {
    string::enforce_case(s, casing)
}

//! Character and string generators.
//!
//! Characters come from a half-open code range. The backslash is never
//! produced; letters-only mode keeps `[A-Za-z]`.

use fixture_core::{Casing, GeneratorError, Result, StringConfig};
use rand::seq::IndexedRandom;
use rand::Rng;

/// First printable ASCII code.
pub const DEFAULT_MIN_CODE: u32 = 32;
/// One past the last printable ASCII code.
pub const DEFAULT_MAX_CODE: u32 = 127;

const BACKSLASH: u32 = 92;
const UPPER_LETTERS: std::ops::Range<u32> = 65..91;
const LOWER_LETTERS: std::ops::Range<u32> = 97..123;
const CODE_SPACE_END: u32 = 0x11_0000;

/// Whether `code` falls outside `[A-Z]` and `[a-z]`.
pub fn is_non_letter_code(code: u32) -> bool {
    !UPPER_LETTERS.contains(&code) && !LOWER_LETTERS.contains(&code)
}

/// Generate one character with a code in `min_code..max_code`.
///
/// Fails with `InvalidRange` when the range is empty and with
/// `InvalidArgumentType` when it holds no character that may be produced.
pub fn character_gen<R: Rng>(
    rng: &mut R,
    min_code: u32,
    max_code: u32,
    allow_non_letters: bool,
) -> Result<char> {
    if min_code >= max_code {
        return Err(GeneratorError::invalid_range(min_code, max_code));
    }
    if max_code > CODE_SPACE_END {
        return Err(GeneratorError::InvalidArgumentType(format!(
            "character code {max_code:#x} is outside the Unicode code space"
        )));
    }

    if !allow_non_letters {
        let letters: Vec<u32> = UPPER_LETTERS
            .chain(LOWER_LETTERS)
            .filter(|code| (min_code..max_code).contains(code))
            .collect();
        return letters
            .choose(rng)
            .and_then(|&code| char::from_u32(code))
            .ok_or_else(|| {
                GeneratorError::InvalidArgumentType(format!(
                    "no letters in character code range {min_code}..{max_code}"
                ))
            });
    }

    if !has_symbol_candidate(min_code, max_code) {
        return Err(GeneratorError::InvalidArgumentType(format!(
            "no usable characters in code range {min_code}..{max_code}"
        )));
    }
    loop {
        let code = rng.random_range(min_code..max_code);
        if code == BACKSLASH {
            continue;
        }
        if let Some(c) = char::from_u32(code) {
            return Ok(c);
        }
    }
}

/// Whether `min..max` holds a code that is neither the backslash nor a surrogate.
fn has_symbol_candidate(min: u32, max: u32) -> bool {
    (min..max)
        .take(0x802)
        .any(|code| code != BACKSLASH && char::from_u32(code).is_some())
}

/// Force the case of `s` using a casing name (`upper` or `lower`).
pub fn enforce_case(s: &str, casing: &str) -> Result<String> {
    casing.parse::<Casing>().map(|c| c.apply(s))
}

/// Generate a random string.
///
/// The length is uniform in `min_length..=max_length`; characters are
/// printable ASCII, or letters only when `allow_non_letters` is false.
pub fn generate_string<R: Rng>(rng: &mut R, config: &StringConfig) -> Result<String> {
    config.validate()?;

    let length = if config.min_length == config.max_length {
        config.min_length
    } else {
        rng.random_range(config.min_length..=config.max_length)
    };

    let (min_code, max_code) = if config.allow_non_letters {
        (DEFAULT_MIN_CODE, DEFAULT_MAX_CODE)
    } else {
        (UPPER_LETTERS.start, LOWER_LETTERS.end)
    };

    let mut result = String::with_capacity(length);
    for _ in 0..length {
        result.push(character_gen(
            rng,
            min_code,
            max_code,
            config.allow_non_letters,
        )?);
    }

    Ok(match config.casing {
        Some(casing) => casing.apply(&result),
        None => result,
    })
}

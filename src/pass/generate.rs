//! Key generation.

use log::{debug, trace};
use rand::Rng;
use zeroize::Zeroize;

use super::charset::{CharacterPool, Pools};
use crate::error::{KeygenError, Result};

/// A generated password and the length it was generated at.
///
/// The buffer is wiped on drop.
#[derive(Debug)]
pub struct GeneratedKey {
    key: String,
    length: usize,
}

impl GeneratedKey {
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Number of characters in the key.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Drop for GeneratedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Longest key that will be generated.
pub const MAX_KEY_LENGTH: usize = 1 << 20;

/// Check a requested key length.
///
/// # Errors
///
/// [`KeygenError::MissingRequiredArgument`] when absent,
/// [`KeygenError::InvalidArgumentValue`] when not in `1..=MAX_KEY_LENGTH`.
pub fn validate_key_length(key_length: Option<i64>) -> Result<usize> {
    let len = key_length.ok_or(KeygenError::MissingRequiredArgument("keyLength"))?;
    if len <= 0 {
        return Err(KeygenError::InvalidArgumentValue(format!(
            "Input argument 'keyLength' must be an integer greater than 0, got {len}."
        )));
    }
    match usize::try_from(len) {
        Ok(n) if n <= MAX_KEY_LENGTH => Ok(n),
        _ => Err(KeygenError::InvalidArgumentValue(format!(
            "Input argument 'keyLength' must be at most {MAX_KEY_LENGTH}, got {len}."
        ))),
    }
}

/// Parse a key length typed by the user.
///
/// # Errors
///
/// [`KeygenError::InvalidArgumentType`] for non-integers, otherwise as
/// [`validate_key_length`].
pub fn parse_key_length(input: &str) -> Result<usize> {
    let n = input
        .trim()
        .parse::<i64>()
        .map_err(|_| KeygenError::InvalidArgumentType {
            arguments: vec!["keyLength".into()],
            expected: "a positive integer",
        })?;
    validate_key_length(Some(n))
}

/// Generate one key from `pools`.
///
/// Each position first picks one of the non-empty pools with equal
/// probability, then one character of that pool. Small pools therefore weigh
/// as much as large ones.
///
/// # Errors
///
/// [`KeygenError::InvalidArgumentValue`] when every pool is empty, whatever
/// the length; otherwise see [`validate_key_length`].
pub fn generate<R: Rng + ?Sized>(
    pools: &Pools,
    key_length: Option<i64>,
    rng: &mut R,
) -> Result<GeneratedKey> {
    let length = check_request(pools, key_length)?;
    sample(pools, length, rng)
}

/// Generate `count` keys of the same length.
///
/// The request is validated before anything is drawn, so a zero count still
/// reports empty pools or a bad length.
///
/// # Errors
///
/// As [`generate`], plus [`KeygenError::InvalidArgumentValue`] for a zero
/// count.
pub fn generate_batch<R: Rng + ?Sized>(
    pools: &Pools,
    key_length: Option<i64>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedKey>> {
    let length = check_request(pools, key_length)?;
    if count == 0 {
        return Err(KeygenError::InvalidArgumentValue(
            "The number of keys must be greater than 0.".into(),
        ));
    }
    debug!("generating {count} key(s)");
    (0..count).map(|_| sample(pools, length, rng)).collect()
}

fn check_request(pools: &Pools, key_length: Option<i64>) -> Result<usize> {
    if pools.is_empty() {
        return Err(KeygenError::InvalidArgumentValue(
            "All character sets are empty. At least one character set must contain characters."
                .into(),
        ));
    }
    validate_key_length(key_length)
}

fn sample<R: Rng + ?Sized>(pools: &Pools, length: usize, rng: &mut R) -> Result<GeneratedKey> {
    let sources = pools.non_empty();
    trace!("sampling {length} characters from {} pools", sources.len());

    let mut key = String::new();
    key.try_reserve(length).map_err(|e| {
        KeygenError::InvalidArgumentValue(format!("cannot hold a key of length {length}: {e}"))
    })?;
    for _ in 0..length {
        let pool = sources[rng.random_range(0..sources.len())];
        key.push(random_char(pool, rng));
    }

    Ok(GeneratedKey { key, length })
}

#[inline]
fn random_char<R: Rng + ?Sized>(pool: &CharacterPool, rng: &mut R) -> char {
    let chars = pool.as_slice();
    chars[rng.random_range(0..chars.len())]
}

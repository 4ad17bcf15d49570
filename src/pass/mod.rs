//! Pool filtering and key generation.

pub mod charset;
mod filter;
mod generate;

pub use charset::{Blacklist, CharacterPool, Pools};
pub use filter::{FilterOutcome, filter, filter_strings, leaves_usable};
pub use generate::{
    GeneratedKey, MAX_KEY_LENGTH, generate, generate_batch, parse_key_length, validate_key_length,
};

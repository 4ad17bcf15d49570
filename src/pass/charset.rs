//! Character pools and blacklists.

use std::collections::BTreeSet;
use std::fmt;


const DIGITS: &str = "0123456789";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A set of single characters eligible for sampling.
///
/// Members are kept sorted and unique, so the same seed always walks the same
/// characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub fn digits() -> Self {
        DIGITS.chars().collect()
    }

    pub fn letters() -> Self {
        LETTERS.chars().collect()
    }

    /// ASCII punctuation, no whitespace.
    pub fn symbols() -> Self {
        (0u8..=127)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .collect()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.binary_search(&c).is_ok()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Characters of this pool that are not in `blacklist`.
    pub fn without(&self, blacklist: &Blacklist) -> Self {
        self.iter().filter(|c| !blacklist.contains(*c)).collect()
    }
}

impl FromIterator<char> for CharacterPool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let set: BTreeSet<char> = iter.into_iter().collect();
        Self(set.into_iter().collect())
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Characters that must not appear in any pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist(BTreeSet<char>);

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every character of `line` is one entry, whitespace included.
    pub fn parse(line: &str) -> Self {
        line.chars().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for Blacklist {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Blacklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// The three pools a key is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    pub numbers: CharacterPool,
    pub letters: CharacterPool,
    pub symbols: CharacterPool,
}

impl Pools {
    /// Fresh pools for a new settings epoch: digits, ASCII letters, punctuation.
    pub fn standard() -> Self {
        Self {
            numbers: CharacterPool::digits(),
            letters: CharacterPool::letters(),
            symbols: CharacterPool::symbols(),
        }
    }

    pub fn new(numbers: CharacterPool, letters: CharacterPool, symbols: CharacterPool) -> Self {
        Self {
            numbers,
            letters,
            symbols,
        }
    }

    pub fn all(&self) -> [&CharacterPool; 3] {
        [&self.numbers, &self.letters, &self.symbols]
    }

    /// True when no pool has anything left to sample.
    pub fn is_empty(&self) -> bool {
        self.all().iter().all(|p| p.is_empty())
    }

    pub fn contains(&self, c: char) -> bool {
        self.all().iter().any(|p| p.contains(c))
    }

    /// Total number of distinct characters across the pools.
    pub fn len(&self) -> usize {
        self.union().len()
    }

    pub fn union(&self) -> CharacterPool {
        self.all().into_iter().flat_map(|p| p.iter()).collect()
    }

    /// Pools that still hold at least one character.
    pub fn non_empty(&self) -> Vec<&CharacterPool> {
        self.all().into_iter().filter(|p| !p.is_empty()).collect()
    }
}

/// Collect one-character strings, recording `name` in `offenders` when any
/// entry is empty or longer than one character.
pub(super) fn collect_chars<S, C>(name: &str, entries: &[S], offenders: &mut Vec<String>) -> C
where
    S: AsRef<str>,
    C: FromIterator<char>,
{
    let mut bad = false;
    let chars = entries
        .iter()
        .filter_map(|s| {
            let mut it = s.as_ref().chars();
            match (it.next(), it.next()) {
                (Some(c), None) => Some(c),
                _ => {
                    bad = true;
                    None
                }
            }
        })
        .collect();
    if bad {
        offenders.push(name.to_string());
    }
    chars
}

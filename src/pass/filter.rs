//! Blacklist filtering of character pools.

use log::debug;

use super::charset::{Blacklist, CharacterPool, Pools, collect_chars};
use crate::error::{KeygenError, Result};

/// Result of removing a blacklist from a set of pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub pools: Pools,
    /// Blacklisted characters that removed something from a pool.
    pub effective: Blacklist,
    /// Blacklisted characters that were in no pool to begin with.
    pub unused: Blacklist,
}

/// Remove every blacklisted character from the pools.
///
/// The input pools are left untouched; callers rebind to
/// [`FilterOutcome::pools`].
///
/// # Errors
///
/// [`KeygenError::MissingRequiredArgument`] when no blacklist is given. The
/// interactive shell never gets here without one since it prompts first.
pub fn filter(pools: &Pools, blacklist: Option<&Blacklist>) -> Result<FilterOutcome> {
    let blacklist = blacklist.ok_or(KeygenError::MissingRequiredArgument("blacklist"))?;

    let (effective, unused): (Vec<char>, Vec<char>) =
        blacklist.iter().partition(|&c| pools.contains(c));

    let filtered = Pools::new(
        pools.numbers.without(blacklist),
        pools.letters.without(blacklist),
        pools.symbols.without(blacklist),
    );

    debug!(
        "filtered pools: {} -> {} characters ({} blacklist entries unused)",
        pools.len(),
        filtered.len(),
        unused.len()
    );

    Ok(FilterOutcome {
        pools: filtered,
        effective: effective.into_iter().collect(),
        unused: unused.into_iter().collect(),
    })
}

/// [`filter`] over raw strings, each of which must be exactly one character.
///
/// All four arguments are checked before failing and the error names every
/// one that held a bad element, blacklist included.
///
/// # Errors
///
/// [`KeygenError::InvalidCharacterLength`] for bad elements, otherwise as
/// [`filter`].
pub fn filter_strings<S: AsRef<str>>(
    numbers: &[S],
    letters: &[S],
    symbols: &[S],
    blacklist: Option<&[S]>,
) -> Result<FilterOutcome> {
    let mut offenders = Vec::new();
    let numbers: CharacterPool = collect_chars("numbers", numbers, &mut offenders);
    let letters: CharacterPool = collect_chars("letters", letters, &mut offenders);
    let symbols: CharacterPool = collect_chars("symbols", symbols, &mut offenders);
    let blacklist: Option<Blacklist> =
        blacklist.map(|entries| collect_chars("blacklist", entries, &mut offenders));

    if !offenders.is_empty() {
        return Err(KeygenError::InvalidCharacterLength {
            arguments: offenders,
        });
    }

    filter(&Pools::new(numbers, letters, symbols), blacklist.as_ref())
}

/// True when at least one character survives `blacklist`.
pub fn leaves_usable(pools: &Pools, blacklist: &Blacklist) -> bool {
    pools
        .all()
        .iter()
        .any(|p| p.iter().any(|c| !blacklist.contains(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_only(chars: &str) -> Pools {
        Pools::new(chars.chars().collect(), CharacterPool::empty(), CharacterPool::empty())
    }

    #[test]
    fn absent_blacklist_is_missing_argument() {
        let err = filter(&Pools::standard(), None).unwrap_err();
        assert!(matches!(err, KeygenError::MissingRequiredArgument("blacklist")));
    }

    #[test]
    fn blacklisting_unknown_character_has_no_effect() {
        let pools = digits_only("01");
        let out = filter(&pools, Some(&Blacklist::parse("9"))).unwrap();
        assert!(out.effective.is_empty());
        assert_eq!(out.unused, Blacklist::parse("9"));
        assert_eq!(out.pools, pools);
    }

    #[test]
    fn blacklisting_present_character_removes_it() {
        let out = filter(&digits_only("01"), Some(&Blacklist::parse("0"))).unwrap();
        assert_eq!(out.effective, Blacklist::parse("0"));
        assert_eq!(out.pools.numbers.as_slice(), &['1']);
        assert!(out.unused.is_empty());
    }

    #[test]
    fn filter_touches_every_pool() {
        let out = filter(&Pools::standard(), Some(&Blacklist::parse("5a!é"))).unwrap();
        assert!(!out.pools.numbers.contains('5'));
        assert!(!out.pools.letters.contains('a'));
        assert!(!out.pools.symbols.contains('!'));
        assert!(out.pools.letters.contains('A'));
        assert_eq!(out.effective, Blacklist::parse("5a!"));
        assert_eq!(out.unused, Blacklist::parse("é"));
    }

    #[test]
    fn input_pools_are_not_mutated() {
        let pools = Pools::standard();
        let before = pools.clone();
        let _ = filter(&pools, Some(&Blacklist::parse("0123456789"))).unwrap();
        assert_eq!(pools, before);
    }

    #[test]
    fn empty_blacklist_keeps_everything() {
        let out = filter(&Pools::standard(), Some(&Blacklist::new())).unwrap();
        assert_eq!(out.pools, Pools::standard());
        assert!(out.effective.is_empty());
    }

    #[test]
    fn usable_check_rejects_full_blacklist() {
        let pools = digits_only("01");
        assert!(!leaves_usable(&pools, &Blacklist::parse("01")));
        assert!(leaves_usable(&pools, &Blacklist::parse("0")));
        assert!(!leaves_usable(&Pools::default(), &Blacklist::new()));
    }

    #[test]
    fn string_filter_reports_pool_and_blacklist_offenders_together() {
        let err = filter_strings(&["1", "22"], &["a"], &["!"], Some(&["x", "yz"][..])).unwrap_err();
        match err {
            KeygenError::InvalidCharacterLength { arguments } => {
                assert_eq!(arguments, vec!["numbers", "blacklist"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn string_filter_checks_lengths_before_missing_blacklist() {
        let err = filter_strings(&["1"], &[""], &["!"], None).unwrap_err();
        assert!(matches!(err, KeygenError::InvalidCharacterLength { .. }));
        let err = filter_strings(&["1"], &["a"], &["!"], None).unwrap_err();
        assert!(matches!(err, KeygenError::MissingRequiredArgument("blacklist")));
    }

    #[test]
    fn string_filter_matches_typed_filter() {
        let out = filter_strings(&["0", "1"], &["a"], &[], Some(&["0", "z"][..])).unwrap();
        assert_eq!(out.pools.numbers.as_slice(), &['1']);
        assert_eq!(out.pools.letters.as_slice(), &['a']);
        assert_eq!(out.effective, Blacklist::parse("0"));
        assert_eq!(out.unused, Blacklist::parse("z"));
    }
}

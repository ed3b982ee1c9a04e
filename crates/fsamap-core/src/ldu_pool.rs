//! The shuffled pool of candidate LDUs used to sample urban FSAs.
//!
//! Urban LDUs are not listed anywhere we can scrape, so the search probes a
//! prefix of a shuffled enumeration instead. The pool is generated once from
//! an explicit seed and persisted; later runs load it rather than reshuffle,
//! so the sampled prefix stays stable across resumed runs.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::CoreError;

/// Letters Canada Post uses in LDUs (no D, F, I, O, Q or U).
pub const LDU_LETTERS: [char; 20] = [
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W', 'X', 'Y',
    'Z',
];

/// Size of the enumeration: leading digit 1-9, letter, trailing digit 0-9.
pub const LDU_POOL_SIZE: usize = 1_800;

/// Returns `true` for a pool member: digit 1-9, an LDU letter, digit 0-9.
#[must_use]
pub fn is_pool_ldu(code: &str) -> bool {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(letter), Some(last), None) => {
            matches!(first, '1'..='9') && LDU_LETTERS.contains(&letter) && last.is_ascii_digit()
        }
        _ => false,
    }
}

/// Every pool LDU in lexicographic order.
#[must_use]
pub fn all_ldus() -> Vec<String> {
    let mut ldus = Vec::with_capacity(LDU_POOL_SIZE);
    for first in '1'..='9' {
        for letter in LDU_LETTERS {
            for last in '0'..='9' {
                ldus.push(format!("{first}{letter}{last}"));
            }
        }
    }
    ldus
}

/// Produces a uniformly shuffled permutation of [`all_ldus`].
pub fn generate_ldu_pool<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut pool = all_ldus();
    pool.shuffle(rng);
    pool
}

/// Deterministic pool for a given seed.
#[must_use]
pub fn generate_seeded_ldu_pool(seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_ldu_pool(&mut rng)
}

/// Checks that a loaded pool is a permutation of the full enumeration.
///
/// # Errors
///
/// Returns [`CoreError::InvalidLduPool`] if the pool has the wrong size,
/// contains a code outside the enumeration, or repeats a code.
pub fn validate_ldu_pool(pool: &[String]) -> Result<(), CoreError> {
    if pool.len() != LDU_POOL_SIZE {
        return Err(CoreError::InvalidLduPool(format!(
            "expected {LDU_POOL_SIZE} codes, found {}",
            pool.len()
        )));
    }
    let mut seen = HashSet::with_capacity(pool.len());
    for code in pool {
        if !is_pool_ldu(code) {
            return Err(CoreError::InvalidLduPool(format!("\"{code}\" is not a pool LDU")));
        }
        if !seen.insert(code.as_str()) {
            return Err(CoreError::InvalidLduPool(format!("\"{code}\" appears twice")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_has_expected_size_and_no_duplicates() {
        let ldus = all_ldus();
        assert_eq!(ldus.len(), LDU_POOL_SIZE);
        let unique: HashSet<&String> = ldus.iter().collect();
        assert_eq!(unique.len(), LDU_POOL_SIZE);
        assert!(ldus.iter().all(|l| is_pool_ldu(l)));
    }

    #[test]
    fn excluded_letters_never_appear() {
        for code in all_ldus() {
            let letter = code.chars().nth(1).unwrap();
            assert!(!"DFIOQU".contains(letter), "{code}");
        }
    }

    #[test]
    fn seeded_pool_is_deterministic_permutation() {
        let a = generate_seeded_ldu_pool(42);
        let b = generate_seeded_ldu_pool(42);
        assert_eq!(a, b);
        validate_ldu_pool(&a).expect("seeded pool should be a permutation");
        assert_ne!(a, all_ldus(), "pool should be shuffled");
    }

    #[test]
    fn different_seeds_give_different_orders() {
        assert_ne!(generate_seeded_ldu_pool(1), generate_seeded_ldu_pool(2));
    }

    #[test]
    fn validate_rejects_truncated_pool() {
        let mut pool = generate_seeded_ldu_pool(7);
        pool.pop();
        assert!(matches!(
            validate_ldu_pool(&pool),
            Err(CoreError::InvalidLduPool(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let mut pool = generate_seeded_ldu_pool(7);
        pool[1] = pool[0].clone();
        let err = validate_ldu_pool(&pool).unwrap_err();
        assert!(err.to_string().contains("appears twice"), "{err}");
    }

    #[test]
    fn validate_rejects_foreign_codes() {
        let mut pool = generate_seeded_ldu_pool(7);
        pool[0] = "0A0".to_owned();
        assert!(validate_ldu_pool(&pool).is_err());
    }

    #[test]
    fn pool_ldu_pattern() {
        assert!(is_pool_ldu("1A0"));
        assert!(is_pool_ldu("9Z9"));
        assert!(!is_pool_ldu("0A0"));
        assert!(!is_pool_ldu("1D0"));
        assert!(!is_pool_ldu("1a0"));
        assert!(!is_pool_ldu("1A"));
    }
}

//! Short identifier generation.
//!
//! Identifiers are short strings of decimal digits with randomized length,
//! so they are neither sequential nor sortable. Collisions are expected and
//! handled by the caller's retry loop, not avoided by construction.

use rand::Rng;

/// Minimum identifier length in digits.
pub const MIN_ID_DIGITS: usize = 1;

/// Maximum identifier length in digits.
pub const MAX_ID_DIGITS: usize = 4;

/// Generates a random short identifier.
///
/// The length is drawn uniformly from 1 to 4 digits, then each position is
/// filled with a uniform decimal digit.
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id();
/// assert!((1..=4).contains(&id.len()));
/// assert!(id.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate_short_id() -> String {
    let mut rng = rand::rng();
    let length = rng.random_range(MIN_ID_DIGITS..=MAX_ID_DIGITS);

    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_short_id_not_empty() {
        let id = generate_short_id();
        assert!(!id.is_empty());
    }

    #[test]
    fn test_generate_short_id_length_in_range() {
        for _ in 0..1000 {
            let id = generate_short_id();
            assert!(
                (MIN_ID_DIGITS..=MAX_ID_DIGITS).contains(&id.len()),
                "identifier '{}' has length outside 1..=4",
                id
            );
        }
    }

    #[test]
    fn test_generate_short_id_only_decimal_digits() {
        for _ in 0..1000 {
            let id = generate_short_id();
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_short_id_covers_all_lengths() {
        let mut lengths = HashSet::new();

        for _ in 0..1000 {
            lengths.insert(generate_short_id().len());
        }

        assert_eq!(lengths, HashSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn test_generate_short_id_covers_all_digits() {
        let mut digits = HashSet::new();

        for _ in 0..1000 {
            digits.extend(generate_short_id().chars());
        }

        assert_eq!(digits.len(), 10);
    }
}

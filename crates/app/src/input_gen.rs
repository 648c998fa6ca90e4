//! Sample text generation.
//!
//! When no text is given we encode a generated sample. The sample draws from
//! a small alphabet with skewed weights, so the resulting code has a visible
//! spread of codeword lengths.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sample alphabet and relative weights (roughly English letter frequency).
const ALPHABET: &[(char, u32)] = &[
    (' ', 18),
    ('e', 12),
    ('t', 9),
    ('a', 8),
    ('o', 7),
    ('i', 7),
    ('n', 6),
    ('s', 6),
    ('h', 6),
    ('r', 6),
    ('d', 4),
    ('l', 4),
    ('u', 3),
    ('c', 2),
    ('m', 2),
    ('w', 2),
    ('f', 2),
    ('g', 2),
    ('y', 2),
    ('p', 2),
    ('b', 1),
    ('v', 1),
    ('k', 1),
];

/// Generate `len` characters of sample text.
///
/// The same seed always yields the same text.
pub fn generate_sample_text(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let total: u32 = ALPHABET.iter().map(|&(_, weight)| weight).sum();

    (0..len)
        .map(|_| pick(rng.gen_range(0..total)))
        .collect()
}

/// Map a point in `0..total` onto the alphabet by cumulative weight.
fn pick(mut point: u32) -> char {
    for &(symbol, weight) in ALPHABET {
        if point < weight {
            return symbol;
        }
        point -= weight;
    }
    ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_text() {
        let text = generate_sample_text(42, 1000);
        assert_eq!(text.chars().count(), 1000);
        assert!(text.chars().all(|c| ALPHABET.iter().any(|&(a, _)| a == c)));
    }

    #[test]
    fn test_determinism() {
        let text1 = generate_sample_text(12345, 500);
        let text2 = generate_sample_text(12345, 500);

        assert_eq!(text1, text2);
    }

    #[test]
    fn test_different_seeds() {
        let text1 = generate_sample_text(1, 200);
        let text2 = generate_sample_text(2, 200);

        assert_ne!(text1, text2);
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 100, 1000, 10000] {
            let text = generate_sample_text(999, size);
            assert_eq!(text.chars().count(), size);
        }
    }

    #[test]
    fn test_pick_boundaries() {
        assert_eq!(pick(0), ' ');
        assert_eq!(pick(17), ' ');
        assert_eq!(pick(18), 'e');
        let total: u32 = ALPHABET.iter().map(|&(_, w)| w).sum();
        assert_eq!(pick(total - 1), 'k');
    }

    #[test]
    fn test_skewed_distribution() {
        let text = generate_sample_text(7, 10000);
        let spaces = text.chars().filter(|&c| c == ' ').count();
        let ks = text.chars().filter(|&c| c == 'k').count();
        assert!(spaces > ks * 4);
    }
}

//! Seeded random areas and an independent effort oracle.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a valid `rows` x `width` area from `seed`.
pub fn random_area(seed: u64, rows: usize, width: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            (0..width)
                .map(|_| char::from(b'0' + rng.random_range(0..=9u8)))
                .collect::<String>()
        })
        .collect()
}

/// Minimum effort computed from the raise/cut split rather than the gap rule.
///
/// Each cell pays to be raised up to `t` and to be cut down to `t + 1`.
pub fn oracle_minimum(rows: &[String]) -> u32 {
    (0..=9u32)
        .map(|t| {
            rows.iter()
                .flat_map(|row| row.bytes())
                .map(|b| {
                    let h = u32::from(b - b'0');
                    t.saturating_sub(h) + h.saturating_sub(t + 1)
                })
                .sum::<u32>()
        })
        .min()
        .unwrap_or(0)
}

//! Random input generators for stress tests and the perf binaries.

use rand::Rng;

/// Generates a random vector of `n` values in [0, `range_size`).
///
/// ## Examples
/// ```
/// use kata::gen_sequences::gen_values;
///
/// let values = gen_values(5, 10);
/// assert_eq!(values.len(), 5);
/// assert!(values.iter().all(|&v| (0..10).contains(&v)));
/// ```
pub fn gen_values(n: usize, range_size: u64) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(0..range_size) as i64).collect()
}

/// Generates a random vector of `n` values drawn from {0, 1, 2}.
///
/// ## Examples
/// ```
/// use kata::gen_sequences::gen_ternary;
///
/// let values = gen_ternary(5);
/// assert_eq!(values.len(), 5);
/// assert!(values.iter().all(|&v| v <= 2));
/// ```
pub fn gen_ternary(n: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(0..3u8)).collect()
}

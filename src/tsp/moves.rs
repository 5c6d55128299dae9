//! In-place tour perturbations.

use rand::Rng;

/// Swaps two distinct random positions.
///
/// Returns the swapped positions, or `None` when `seq` has fewer than two
/// elements.
pub fn swap_random<T, R: Rng>(seq: &mut [T], rng: &mut R) -> Option<(usize, usize)> {
    let n = seq.len();
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    seq.swap(i, j);
    Some((i, j))
}

/// Swaps a random position with its successor, wrapping the last to the first.
pub fn swap_random_neighbours<T, R: Rng>(seq: &mut [T], rng: &mut R) -> Option<(usize, usize)> {
    let n = seq.len();
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let j = (i + 1) % n;
    seq.swap(i, j);
    Some((i, j))
}

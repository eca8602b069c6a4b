//! Subsampling Without Replacement
//!
//! Each tree trains on `v` distinct samples drawn uniformly from the full
//! dataset. Sampling operates on a private index pool, never on the caller's
//! data: a remaining index is picked uniformly and swap-removed from the end
//! of the pool, which is O(v) removals since the pool's order is irrelevant.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::{ForestError, ForestResult};
use crate::rng::RandomSource;

/// Draw `size` distinct indices uniformly from `0..population`
///
/// Fails with [`ForestError::EmptyDataset`] for an empty population and
/// [`ForestError::SubsampleTooLarge`] when `size` exceeds it.
pub fn subsample<R: RandomSource + ?Sized>(
    rng: &mut R,
    population: usize,
    size: usize,
) -> ForestResult<Vec<usize>> {
    if population == 0 {
        return Err(ForestError::EmptyDataset);
    }
    if size > population {
        return Err(ForestError::SubsampleTooLarge {
            requested: size,
            available: population,
        });
    }
    Ok(draw_indices(rng, population, size))
}

/// Pool-based draw; preconditions checked by the caller
pub(crate) fn draw_indices<R: RandomSource + ?Sized>(
    rng: &mut R,
    population: usize,
    size: usize,
) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..population).collect();
    let mut chosen = Vec::with_capacity(size);

    for _ in 0..size {
        let r = rng.next_index(pool.len());
        chosen.push(pool.swap_remove(r));
    }

    chosen
}

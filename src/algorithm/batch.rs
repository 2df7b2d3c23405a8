//! Parallel generation of many images
//!
//! Images share nothing but the read-only [`Synthesizer`], so each runs on its own
//! worker with its own seeded random source and no synchronization beyond handing
//! finished images to the sink.

use crate::algorithm::executor::{Stage, Synthesizer};
use crate::io::error::{CamoError, Result, invalid_parameter};
use image::RgbImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Fresh base seed drawn from the operating system
pub fn entropy_seed() -> u64 {
    rand::rng().random()
}

/// One independent seed per image, derived deterministically from `base_seed`
pub fn derive_seeds(base_seed: u64, count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(base_seed);
    (0..count).map(|_| rng.random()).collect()
}

/// Build the worker pool; `None` uses one worker per core
///
/// # Errors
///
/// Returns an error if `threads` is zero or the pool cannot be created
pub fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(invalid_parameter(
            "threads",
            &n,
            &"worker count must be at least one when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| CamoError::ThreadPool {
        reason: e.to_string(),
    })
}

/// Generate one image per seed in parallel
///
/// `observer` receives `(image_index, stage)` as each image progresses; `sink`
/// receives every finished image with its index. Images finish in any order.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built, or the first error returned
/// by `sink`; images still in flight are then abandoned.
pub fn generate_batch<O, S>(
    synthesizer: &Synthesizer,
    seeds: &[u64],
    threads: Option<usize>,
    observer: O,
    sink: S,
) -> Result<()>
where
    O: Fn(usize, Stage) + Sync,
    S: Fn(usize, RgbImage) -> Result<()> + Sync,
{
    let pool = build_thread_pool(threads)?;
    pool.install(|| {
        seeds
            .par_iter()
            .enumerate()
            .try_for_each(|(index, &seed)| {
                let mut rng = StdRng::seed_from_u64(seed);
                let image =
                    synthesizer.synthesize_observed(&mut rng, |stage, _| observer(index, stage));
                sink(index, image)
            })
    })
}

use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling and timing for one size class.
#[derive(Clone, Copy, Debug)]
struct RuntimePreset {
    max_size: usize,
    sample_size: usize,
    warm_up: Duration,
    measurement: Duration,
}

/// Ordered by `max_size`; the last entry catches everything larger.
const PRESETS: [RuntimePreset; 3] = [
    RuntimePreset {
        max_size: 4_096,
        sample_size: 15,
        warm_up: Duration::from_millis(100),
        measurement: Duration::from_millis(200),
    },
    RuntimePreset {
        max_size: 16_384,
        sample_size: 15,
        warm_up: Duration::from_millis(500),
        measurement: Duration::from_millis(1_000),
    },
    RuntimePreset {
        max_size: usize::MAX,
        sample_size: 10,
        warm_up: Duration::from_millis(800),
        measurement: Duration::from_millis(1_500),
    },
];
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks sampling and timing presets scaled to the input size.
pub fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    let preset = PRESETS
        .iter()
        .find(|preset| size <= preset.max_size)
        .unwrap_or(&PRESETS[PRESETS.len() - 1]);
    group.sample_size(preset.sample_size);
    group.warm_up_time(preset.warm_up);
    group.measurement_time(preset.measurement);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_values<R: Rng + ?Sized>(rng: &mut R, n: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// Inclusive `(left, right)` pairs with `left <= right < n`.
pub fn generate_ranges<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<(usize, usize)> {
    debug_assert!(n > 0);
    (0..count)
        .map(|_| {
            let l = rng.random_range(0..n);
            let r = rng.random_range(l..n);
            (l, r)
        })
        .collect()
}

/// `(index, value)` point writes with `index < n`.
pub fn generate_updates<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    count: usize,
    range: RangeInclusive<i64>,
) -> Vec<(usize, i64)> {
    debug_assert!(n > 0);
    (0..count)
        .map(|_| (rng.random_range(0..n), rng.random_range(range.clone())))
        .collect()
}

use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Tiered criterion settings: small inputs get shorter measurement
/// windows, large inputs fewer samples with longer ones.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    let (samples, warm_up_ms, measure_ms) = if size <= 4_096 {
        (15, 100, 200)
    } else if size <= 16_384 {
        (15, 500, 1_000)
    } else {
        (10, 800, 1_500)
    };
    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}

pub fn random_i64_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

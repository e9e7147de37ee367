use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const SMALL_MEASURE_MS: u64 = 120;
const LARGE_MEASURE_MS: u64 = 300;
const XL_MEASURE_MS: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Input shapes fed to every sort under benchmark.
#[derive(Clone, Copy, Debug)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    FewDistinct,
}

pub const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewDistinct,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewDistinct => "few_distinct",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::NearlySorted1pctSwaps => 12,
            Self::FewDistinct => 13,
        }
    }
}

/// Scales sampling to the input size so the largest inputs stay in budget.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(SMALL_MEASURE_MS));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(LARGE_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(XL_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Keys in `0..=max` drawn from `dist`, reproducible for a given
/// `(dist, size, max, salt)`.
pub fn generate_keys(dist: Distribution, size: usize, max: u64, salt: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed_for(dist, size, max ^ salt));
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(rng.random_range(0..=max));
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            for i in 0..size {
                data.push(if max == u64::MAX {
                    i as u64
                } else {
                    (i as u64) % (max + 1)
                });
            }
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
        Distribution::FewDistinct => {
            let distinct: Vec<u64> = (0..16).map(|_| rng.random_range(0..=max)).collect();
            for _ in 0..size {
                data.push(distinct[rng.random_range(0..distinct.len())]);
            }
        }
    }

    data
}

#[inline]
fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ (dist.salt() << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_stay_in_range_and_are_reproducible() {
        for dist in DISTRIBUTIONS {
            let a = generate_keys(dist, 1000, 99, 7);
            let b = generate_keys(dist, 1000, 99, 7);
            assert_eq!(a.len(), 1000);
            assert!(a.iter().all(|&x| x <= 99), "dist={}", dist.label());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn full_range_nearly_sorted_is_a_permutation() {
        let mut data = generate_keys(Distribution::NearlySorted1pctSwaps, 500, u64::MAX, 0);
        data.sort_unstable();
        assert!(data.iter().enumerate().all(|(i, &x)| x == i as u64));
    }
}

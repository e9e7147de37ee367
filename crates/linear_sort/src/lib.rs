mod counting_sort;
mod error;
mod key;
mod radix_sort;

use std::fmt;

pub use counting_sort::counting_sort;
pub use error::SortError;
pub use key::{KeyFn, identity};
pub use radix_sort::{digit, digit_count, radix_sort, radix_sort_by_key};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataTrack {
    FullU64,
    BoundedU20,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    CountingSort,
    RadixSort { base: u64 },
}

pub const ALL_ALGORITHMS: [Algorithm; 5] = [
    Algorithm::CountingSort,
    Algorithm::RadixSort { base: 2 },
    Algorithm::RadixSort { base: 10 },
    Algorithm::RadixSort { base: 256 },
    Algorithm::RadixSort { base: 1 << 16 },
];

pub fn all_algorithms() -> &'static [Algorithm] {
    &ALL_ALGORITHMS
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountingSort => f.write_str("counting_sort"),
            Self::RadixSort { base } => write!(f, "radix_sort_base{base}"),
        }
    }
}

/// Counting sort allocates one histogram slot per possible key, so it only
/// runs on bounded keys.
pub fn supports_track(algo: Algorithm, track: DataTrack) -> bool {
    !matches!(
        (algo, track),
        (Algorithm::CountingSort, DataTrack::FullU64)
    )
}

pub fn sort_u64(algo: Algorithm, data: &mut [u64]) -> Result<(), SortError> {
    match algo {
        Algorithm::CountingSort => counting_sort(data, |&x: &u64| {
            usize::try_from(x).unwrap_or(usize::MAX)
        }),
        Algorithm::RadixSort { base } => radix_sort(data, base),
    }
}

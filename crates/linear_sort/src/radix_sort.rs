use crate::{SortError, counting_sort};

/// LSD radix sort of non-negative integers in the given base.
///
/// Each digit position is one stable [`counting_sort`] pass, least
/// significant first. `base` must be greater than 1.
pub fn radix_sort(data: &mut [u64], base: u64) -> Result<(), SortError> {
    radix_sort_by_key(data, base, |&x| x)
}

/// LSD radix sort of arbitrary elements by a `u64` key. Stable.
///
/// `base` is validated before the slice is touched.
pub fn radix_sort_by_key<T, F>(data: &mut [T], base: u64, key: F) -> Result<(), SortError>
where
    F: Fn(&T) -> u64,
{
    if base <= 1 {
        return Err(SortError::InvalidBase { base });
    }
    if usize::try_from(base).is_err() {
        return Err(SortError::KeyRangeTooLarge { max_key: base - 1 });
    }
    if data.len() < 2 {
        return Ok(());
    }

    let Some(max) = data.iter().map(&key).max() else {
        return Ok(());
    };
    if max == 0 {
        return Ok(());
    }

    let mut place = 1_u64;
    for _ in 0..digit_count(max, base) {
        counting_sort(data, |x: &T| digit(key(x), place, base))?;
        match place.checked_mul(base) {
            Some(next) => place = next,
            None => break,
        }
    }
    Ok(())
}

/// Number of base-`base` digits needed to write `max`. Zero has one digit.
#[inline]
pub fn digit_count(max: u64, base: u64) -> u32 {
    debug_assert!(base > 1);
    let mut digits = 1;
    let mut rest = max / base;
    while rest > 0 {
        digits += 1;
        rest /= base;
    }
    digits
}

/// `floor(value / place) mod base`, i.e. the digit whose place value is
/// `place`.
#[inline]
pub fn digit(value: u64, place: u64, base: u64) -> usize {
    ((value / place) % base) as usize
}

use crate::{KeyFn, SortError};

/// Stable counting sort of `data` by `key`.
///
/// Runs in `O(n + max_key)` time and space. Elements with equal keys keep
/// their relative order. On error the slice is left untouched.
pub fn counting_sort<T, K: KeyFn<T>>(data: &mut [T], key: K) -> Result<(), SortError> {
    if data.len() < 2 {
        return Ok(());
    }

    let Some(max_key) = max_key(data, &key) else {
        return Ok(());
    };
    let too_large = SortError::KeyRangeTooLarge {
        max_key: max_key as u64,
    };
    let slots = max_key.checked_add(1).ok_or(too_large)?;

    let mut counts = histogram(data, &key, zeroed_table(slots).ok_or(too_large)?)?;
    let mut placement = zeroed_table(slots).ok_or(too_large)?;
    placement_table(&counts, &mut placement);
    let dest = scatter(data, &key, &mut counts, &mut placement)?;

    apply_permutation(data, dest);
    Ok(())
}

#[inline]
fn max_key<T, K: KeyFn<T>>(data: &[T], key: &K) -> Option<usize> {
    data.iter().map(|x| key.key(x)).max()
}

/// A table of `slots` zeros, or `None` if it cannot be allocated.
fn zeroed_table(slots: usize) -> Option<Vec<usize>> {
    let mut table = Vec::new();
    table.try_reserve_exact(slots).ok()?;
    table.resize(slots, 0);
    Some(table)
}

fn histogram<T, K: KeyFn<T>>(
    data: &[T],
    key: &K,
    mut counts: Vec<usize>,
) -> Result<Vec<usize>, SortError> {
    for x in data {
        *counts
            .get_mut(key.key(x))
            .ok_or(SortError::InconsistentKey)? += 1;
    }
    debug_assert_eq!(counts.iter().sum::<usize>(), data.len());
    Ok(counts)
}

/// Fills `placement[k]` with the number of elements whose key is strictly
/// below `k`.
fn placement_table(counts: &[usize], placement: &mut [usize]) {
    debug_assert_eq!(counts.len(), placement.len());
    let mut sum = 0usize;
    for (slot, &c) in placement.iter_mut().zip(counts) {
        *slot = sum;
        sum += c;
    }
}

/// Computes the output slot of every element, in input order.
///
/// `counts` is consumed as the number of slots still free in each key's
/// block, which catches a key function that disagrees with the histogram.
fn scatter<T, K: KeyFn<T>>(
    data: &[T],
    key: &K,
    counts: &mut [usize],
    placement: &mut [usize],
) -> Result<Vec<usize>, SortError> {
    let mut dest = Vec::with_capacity(data.len());
    for x in data {
        let k = key.key(x);
        match counts.get_mut(k) {
            Some(free) if *free > 0 => *free -= 1,
            _ => return Err(SortError::InconsistentKey),
        }
        dest.push(placement[k]);
        placement[k] += 1;
    }
    debug_assert!(counts.iter().all(|&free| free == 0));
    Ok(dest)
}

/// Moves `data[i]` to `data[dest[i]]` for every `i`. `dest` must be a
/// permutation of `0..data.len()`.
fn apply_permutation<T>(data: &mut [T], mut dest: Vec<usize>) {
    debug_assert_eq!(data.len(), dest.len());
    for i in 0..data.len() {
        while dest[i] != i {
            let j = dest[i];
            data.swap(i, j);
            dest.swap(i, j);
        }
    }
}

/// Maps an element to the non-negative integer it is sorted by.
///
/// The sorts call `key` more than once per element within a single
/// invocation, so it must return the same value for the same element.
/// Every `Fn(&T) -> usize` is a `KeyFn<T>`.
pub trait KeyFn<T> {
    fn key(&self, item: &T) -> usize;
}

impl<T, F> KeyFn<T> for F
where
    F: Fn(&T) -> usize,
{
    #[inline]
    fn key(&self, item: &T) -> usize {
        self(item)
    }
}

#[inline]
pub fn identity(x: &usize) -> usize {
    *x
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Second;

    impl KeyFn<(char, usize)> for Second {
        fn key(&self, item: &(char, usize)) -> usize {
            item.1
        }
    }

    fn key_of<T, K: KeyFn<T>>(key: K, item: &T) -> usize {
        key.key(item)
    }

    #[test]
    fn closures_fn_items_and_structs_are_keys() {
        assert_eq!(key_of(identity, &7), 7);
        assert_eq!(key_of(|s: &&str| s.len(), &"four"), 4);
        assert_eq!(key_of(Second, &('x', 3)), 3);

        let offset = 10;
        let shifted = |x: &usize| x + offset;
        assert_eq!(key_of(&shifted, &5), 15);
        assert_eq!(key_of(shifted, &0), 10);
    }
}

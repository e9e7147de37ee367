use thiserror::Error;

/// Errors returned by the sorts. No variant is produced after the caller's
/// slice has been modified, except [`SortError::InconsistentKey`] raised by a
/// later radix pass.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    /// Radix base must be at least 2.
    #[error("radix base must be greater than 1, got {base}")]
    InvalidBase { base: u64 },
    /// A histogram for keys `0..=max_key` (or for the digits of a radix
    /// base) cannot be sized or allocated.
    #[error("cannot allocate a histogram for key range 0..={max_key}")]
    KeyRangeTooLarge { max_key: u64 },
    /// The key function returned different keys for the same element.
    #[error("key function is not deterministic")]
    InconsistentKey,
}

//! Factorials and circular arrangements with a fixed adjacent pair.

use crate::error::Error;

/// Computes `n!` recursively, with `0!` and `1!` both 1.
///
/// Every multiplication is checked, so a product past the `u64` range
/// (`n > 20`) fails instead of wrapping.
///
/// # Errors
///
/// Returns [`Error::Overflow`] when `n!` does not fit in a `u64`.
///
/// # Examples
/// ```
/// use kata::perm::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// assert_eq!(factorial(0), Ok(1));
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u64) -> Result<u64, Error> {
    if n <= 1 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(n)
        .ok_or(Error::Overflow("factorial"))
}

/// Counts the circular arrangements of `n` items in which one designated
/// adjacent pair stays together.
///
/// The pair contributes its 2 internal orders and the remaining items are
/// arranged in a line relative to it, so the count is `2 * (n - 1)!`.
///
/// # Errors
///
/// Returns [`Error::ZeroItems`] for `n == 0` and [`Error::Overflow`] when
/// the count does not fit in a `u64`.
///
/// # Examples
/// ```
/// use kata::perm::circular_perm_with_fixed;
///
/// assert_eq!(circular_perm_with_fixed(4), Ok(12)); // 2 * 3!
/// assert_eq!(circular_perm_with_fixed(1), Ok(2));
/// ```
pub fn circular_perm_with_fixed(n: u64) -> Result<u64, Error> {
    if n == 0 {
        return Err(Error::ZeroItems);
    }
    factorial(n - 1)?
        .checked_mul(2)
        .ok_or(Error::Overflow("circular_perm_with_fixed"))
}

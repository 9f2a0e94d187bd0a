//! Base-10 digit arithmetic over unsigned integers.
//!
//! The routines are generic over the unsigned primitive integers, so a
//! negative operand is unrepresentable rather than checked at run time.

use num::{PrimInt, Unsigned};

// 10 fits in every primitive integer type.
fn ten<T: PrimInt>() -> T {
    T::from(10u8).unwrap()
}

/// Product of the base-10 digits of `n`.
///
/// Any digit equal to 0 makes the product 0, including `n == 0` itself.
///
/// # Examples
/// ```
/// use kata::digits::digit_product;
///
/// assert_eq!(digit_product(234u64), 24);
/// assert_eq!(digit_product(105u64), 0);
/// assert_eq!(digit_product(7u64), 7);
/// ```
#[must_use]
pub fn digit_product<T: PrimInt + Unsigned>(n: T) -> T {
    let ten = ten::<T>();
    let mut n = n;
    let mut product = T::one();
    loop {
        product = product * (n % ten);
        n = n / ten;
        if n.is_zero() {
            break;
        }
    }
    product
}

/// Sum of the base-10 digits of `n`.
///
/// # Examples
/// ```
/// use kata::digits::digit_sum;
///
/// assert_eq!(digit_sum(9875u64), 29);
/// assert_eq!(digit_sum(0u64), 0);
/// ```
#[must_use]
pub fn digit_sum<T: PrimInt + Unsigned>(n: T) -> T {
    let ten = ten::<T>();
    let mut n = n;
    let mut sum = T::zero();
    loop {
        sum = sum + n % ten;
        n = n / ten;
        if n.is_zero() {
            break;
        }
    }
    sum
}

/// Applies [`digit_sum`] to `n` a fixed `repetitions` number of times.
///
/// This is a fixed repetition count, not a reduce-until-single-digit loop:
/// one application of a large number may well leave several digits. Zero
/// repetitions yield 0 for every `n`, not `n`.
///
/// # Examples
/// ```
/// use kata::digits::repeat_digit_sum;
///
/// assert_eq!(repeat_digit_sum(9875u64, 1), 29);
/// assert_eq!(repeat_digit_sum(9875u64, 2), 11);
/// assert_eq!(repeat_digit_sum(9875u64, 0), 0);
/// ```
#[must_use]
pub fn repeat_digit_sum<T: PrimInt + Unsigned>(n: T, repetitions: u32) -> T {
    if repetitions == 0 {
        return T::zero();
    }

    let mut result = n;
    for _ in 0..repetitions {
        result = digit_sum(result);
    }
    result
}

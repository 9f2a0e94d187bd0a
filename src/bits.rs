//! Base-2 text conversions and a textual bit toggle.
//!
//! The toggle operates on the minimal-width binary text of a number, not on
//! a fixed-width two's-complement word. Flipping can therefore shrink the
//! width (leading `1`s become leading `0`s), which makes the operation
//! non-involutive; see [`toggle_bits`].

use crate::error::Error;

/// Returns the minimal-width base-2 text of `n`.
///
/// Negative numbers produce a leading `-` followed by the binary digits of
/// the magnitude, the usual sign-aware radix conversion.
///
/// # Examples
/// ```
/// use kata::bits::decimal_to_binary;
///
/// assert_eq!(decimal_to_binary(13), "1101");
/// assert_eq!(decimal_to_binary(0), "0");
/// assert_eq!(decimal_to_binary(-5), "-101");
/// ```
#[must_use]
pub fn decimal_to_binary(n: i64) -> String {
    if n < 0 {
        format!("-{:b}", n.unsigned_abs())
    } else {
        format!("{n:b}")
    }
}

/// Parses base-2 text with an optional leading `+` or `-` back to an
/// integer.
///
/// # Errors
///
/// Returns [`Error::MalformedBinary`] when `s` contains anything but a
/// leading sign and binary digits, is empty, or encodes a value outside
/// the `i64` range.
///
/// # Examples
/// ```
/// use kata::bits::binary_to_decimal;
///
/// assert_eq!(binary_to_decimal("1101"), Ok(13));
/// assert_eq!(binary_to_decimal("-101"), Ok(-5));
/// assert!(binary_to_decimal("10x1").is_err());
/// ```
pub fn binary_to_decimal(s: &str) -> Result<i64, Error> {
    i64::from_str_radix(s, 2).map_err(|_| Error::MalformedBinary(s.to_string()))
}

/// Flips every digit of the minimal-width binary text of `n` and reparses
/// the result.
///
/// This is textual flipping, not a width-extended complement: `5` (`101`)
/// becomes `010`, i.e. `2`, and because the leading digit turned into a
/// `0` the width shrinks, so toggling twice need not round-trip
/// (`toggle_bits(2)` is `1`, not `5`).
///
/// # Errors
///
/// Returns [`Error::NegativeOperand`] for negative `n`; the minimal-width
/// representation is only defined for the unsigned magnitude.
///
/// # Examples
/// ```
/// use kata::bits::toggle_bits;
///
/// assert_eq!(toggle_bits(5), Ok(2));
/// assert_eq!(toggle_bits(2), Ok(1));
/// assert_eq!(toggle_bits(0), Ok(1));
/// ```
pub fn toggle_bits(n: i64) -> Result<i64, Error> {
    if n < 0 {
        return Err(Error::NegativeOperand(n));
    }
    let flipped: String = format!("{n:b}")
        .chars()
        .map(|bit| if bit == '0' { '1' } else { '0' })
        .collect();
    binary_to_decimal(&flipped)
}

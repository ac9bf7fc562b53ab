//! Sums and products over inclusive integer ranges.
//!
//! The plain functions use wrapping (two's complement) 32-bit arithmetic and
//! never panic, so overflowing ranges produce the same bit pattern a native
//! unchecked `int` loop would. The `checked_` variants report overflow
//! instead.
//!
//! An empty range (`lower_bound > upper_bound`) is not an error: the sum is
//! `0` and the product is `1`.

use crate::error::{MathError, Result};

/// Sums every integer in `lower_bound..=upper_bound`.
///
/// # Complexity
/// Time: O(upper − lower), Space: O(1)
///
/// # Returns
/// - `0` if `lower_bound > upper_bound`.
/// - The wrapped sum if the true sum does not fit in `i32`.
///
/// # Examples
/// ```
/// use mathops::ranges::sum_between;
/// assert_eq!(sum_between(1, 5), 15);
/// assert_eq!(sum_between(-2, 2), 0);
/// assert_eq!(sum_between(5, 1), 0);
/// ```
pub fn sum_between(lower_bound: i32, upper_bound: i32) -> i32 {
    (lower_bound..=upper_bound).fold(0_i32, |sum, i| sum.wrapping_add(i))
}

/// Multiplies every integer in `lower_bound..=upper_bound`.
///
/// # Complexity
/// Time: O(upper − lower), Space: O(1)
///
/// # Returns
/// - `1` if `lower_bound > upper_bound`.
/// - The wrapped product if the true product does not fit in `i32`.
///
/// # Examples
/// ```
/// use mathops::ranges::product_between;
/// assert_eq!(product_between(1, 5), 120);
/// assert_eq!(product_between(5, 1), 1);
/// ```
pub fn product_between(lower_bound: i32, upper_bound: i32) -> i32 {
    (lower_bound..=upper_bound).fold(1_i32, |product, i| product.wrapping_mul(i))
}

/// Like [`sum_between`], but fails instead of wrapping.
///
/// Uses the closed form `(a + b)(b − a + 1) / 2` in 128-bit arithmetic, so
/// only the final sum has to fit in `i32`.
///
/// # Complexity
/// Time: O(1), Space: O(1)
///
/// # Errors
/// [`MathError::Overflow`] if the sum does not fit in `i32`.
///
/// # Examples
/// ```
/// use mathops::{ranges::checked_sum_between, MathError};
/// assert_eq!(checked_sum_between(1, 100), Ok(5050));
/// assert_eq!(checked_sum_between(-70_000, 70_000), Ok(0));
/// assert_eq!(checked_sum_between(1, 100_000), Err(MathError::Overflow));
/// ```
pub fn checked_sum_between(lower_bound: i32, upper_bound: i32) -> Result<i32> {
    if lower_bound > upper_bound {
        return Ok(0);
    }
    let (a, b) = (i128::from(lower_bound), i128::from(upper_bound));
    i32::try_from((a + b) * (b - a + 1) / 2).map_err(|_| MathError::Overflow)
}

/// Like [`product_between`], but fails instead of wrapping.
///
/// A range containing zero yields `Ok(0)` without multiplying anything.
/// Otherwise every factor has magnitude at least 1, so the partial products
/// never shrink and the first one past `2³¹` decides the overflow.
///
/// # Errors
/// [`MathError::Overflow`] if the product does not fit in `i32`.
///
/// # Examples
/// ```
/// use mathops::{ranges::checked_product_between, MathError};
/// assert_eq!(checked_product_between(1, 12), Ok(479_001_600));
/// assert_eq!(checked_product_between(-20, 0), Ok(0));
/// assert_eq!(checked_product_between(1, 13), Err(MathError::Overflow));
/// ```
pub fn checked_product_between(lower_bound: i32, upper_bound: i32) -> Result<i32> {
    if lower_bound <= 0 && 0 <= upper_bound {
        return Ok(0);
    }
    let mut product = 1_i64;
    for i in lower_bound..=upper_bound {
        product *= i64::from(i);
        if product.unsigned_abs() > 1_u64 << 31 {
            return Err(MathError::Overflow);
        }
    }
    i32::try_from(product).map_err(|_| MathError::Overflow)
}

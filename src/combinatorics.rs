//! Factorials and counting formulas.
//!
//! Two families of functions live here.
//!
//! The plain functions ([`factorial`], [`variation`], [`combination`]) keep
//! the classic integer contract: 32-bit wrapping arithmetic and `-1` as the
//! error sentinel. Their argument guard for `variation` and `combination` is
//! `number_of_items < 1 && selected_items < number_of_items`, which only
//! rejects a narrow corner of invalid input. Selecting more items than exist
//! (`k > n ≥ 1`) slips through, hits `factorial` with a negative argument,
//! and divides by the `-1` sentinel: `variation(3, 5) == 6 / -1 == -6`.
//! Callers depending on that output keep getting it.
//!
//! The `try_` functions validate their arguments properly and report
//! overflow, returning [`MathError`] instead of a sentinel. They also avoid
//! full factorials, so `try_combination(40, 2)` succeeds even though `40!`
//! does not fit in 32 bits.

use crate::error::{MathError, Result};
use crate::ranges::{checked_product_between, product_between};

/// Sentinel returned by the plain functions for invalid input.
pub const INVALID: i32 = -1;

/// Computes `n!` with wrapping 32-bit arithmetic.
///
/// # Returns
/// - [`INVALID`] (`-1`) if `n < 0`.
/// - `1` if `n == 0`.
/// - `product_between(1, n)` otherwise; wraps for `n > 12`.
///
/// # Examples
/// ```
/// use mathops::combinatorics::factorial;
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(-1), -1);
/// ```
pub fn factorial(n: i32) -> i32 {
    if n < 0 {
        return INVALID;
    }
    if n == 0 {
        return 1;
    }
    product_between(1, n)
}

/// Counts ordered selections of `selected_items` out of `number_of_items`:
/// `n! / (n − k)!`.
///
/// See the [module docs](self) for the argument guard and its blind spot.
///
/// # Returns
/// - [`INVALID`] if `number_of_items < 1 && selected_items < number_of_items`.
/// - [`INVALID`] if the wrapped divisor is zero (`(n − k)! ≡ 0 mod 2³²`).
/// - `factorial(n) / factorial(n − k)` otherwise, including when either
///   factorial is the `-1` sentinel.
///
/// # Examples
/// ```
/// use mathops::combinatorics::variation;
/// assert_eq!(variation(5, 2), 20);
/// assert_eq!(variation(3, 5), -6);
/// ```
pub fn variation(number_of_items: i32, selected_items: i32) -> i32 {
    if number_of_items < 1 && selected_items < number_of_items {
        return INVALID;
    }
    let divisor = factorial(number_of_items.wrapping_sub(selected_items));
    if divisor == 0 {
        return INVALID;
    }
    factorial(number_of_items).wrapping_div(divisor)
}

/// Counts unordered selections of `selected_items` out of `number_of_items`:
/// `n! / ((n − k)! · k!)`.
///
/// Shares the argument guard of [`variation`].
///
/// # Returns
/// - [`INVALID`] if `number_of_items < 1 && selected_items < number_of_items`.
/// - [`INVALID`] if the wrapped divisor is zero.
/// - `factorial(n) / (factorial(n − k) * factorial(k))` otherwise.
///
/// # Examples
/// ```
/// use mathops::combinatorics::combination;
/// assert_eq!(combination(5, 2), 10);
/// assert_eq!(combination(4, 4), 1);
/// ```
pub fn combination(number_of_items: i32, selected_items: i32) -> i32 {
    if number_of_items < 1 && selected_items < number_of_items {
        return INVALID;
    }
    let divisor = factorial(number_of_items.wrapping_sub(selected_items))
        .wrapping_mul(factorial(selected_items));
    if divisor == 0 {
        return INVALID;
    }
    factorial(number_of_items).wrapping_div(divisor)
}

/// Computes `n!`, failing on negative input or overflow.
///
/// # Errors
/// - [`MathError::NegativeArgument`] if `n < 0`.
/// - [`MathError::Overflow`] if `n > 12`.
///
/// # Examples
/// ```
/// use mathops::{combinatorics::try_factorial, MathError};
/// assert_eq!(try_factorial(12), Ok(479_001_600));
/// assert_eq!(try_factorial(13), Err(MathError::Overflow));
/// ```
pub fn try_factorial(n: i32) -> Result<i32> {
    if n < 0 {
        return Err(MathError::NegativeArgument(n));
    }
    checked_product_between(1, n)
}

/// Computes `n! / (n − k)!` as the falling product `n · (n−1) ··· (n−k+1)`.
///
/// # Errors
/// - [`MathError::NegativeArgument`] if `n < 0` or `k < 0`.
/// - [`MathError::SelectionExceedsItems`] if `k > n`.
/// - [`MathError::Overflow`] if the result does not fit in `i32`.
///
/// # Examples
/// ```
/// use mathops::combinatorics::try_variation;
/// assert_eq!(try_variation(100, 2), Ok(9900));
/// assert!(try_variation(3, 5).is_err());
/// ```
pub fn try_variation(number_of_items: i32, selected_items: i32) -> Result<i32> {
    validate_selection(number_of_items, selected_items)?;
    if selected_items == 0 {
        return Ok(1);
    }
    checked_product_between(number_of_items - selected_items + 1, number_of_items)
}

/// Computes the binomial coefficient `C(n, k)` without full factorials.
///
/// # Algorithm
/// Multiplicative formula over `k' = min(k, n − k)` steps. After step `i`
/// the accumulator holds `C(n − k' + i, i)`, so every division is exact and
/// every intermediate is bounded by the final result.
///
/// # Complexity
/// Time: O(min(k, n − k)), Space: O(1)
///
/// # Errors
/// - [`MathError::NegativeArgument`] if `n < 0` or `k < 0`.
/// - [`MathError::SelectionExceedsItems`] if `k > n`.
/// - [`MathError::Overflow`] if the result does not fit in `i32`.
///
/// # Examples
/// ```
/// use mathops::combinatorics::try_combination;
/// assert_eq!(try_combination(40, 2), Ok(780));
/// assert_eq!(try_combination(5, 0), Ok(1));
/// ```
pub fn try_combination(number_of_items: i32, selected_items: i32) -> Result<i32> {
    validate_selection(number_of_items, selected_items)?;
    let n = i64::from(number_of_items);
    let k = i64::from(selected_items.min(number_of_items - selected_items));
    let mut acc = 1_i64;
    for i in 1..=k {
        acc = acc * (n - k + i) / i;
        if acc > i64::from(i32::MAX) {
            return Err(MathError::Overflow);
        }
    }
    i32::try_from(acc).map_err(|_| MathError::Overflow)
}

fn validate_selection(number_of_items: i32, selected_items: i32) -> Result<()> {
    if number_of_items < 0 {
        return Err(MathError::NegativeArgument(number_of_items));
    }
    if selected_items < 0 {
        return Err(MathError::NegativeArgument(selected_items));
    }
    if selected_items > number_of_items {
        return Err(MathError::SelectionExceedsItems {
            items: number_of_items,
            selected: selected_items,
        });
    }
    Ok(())
}

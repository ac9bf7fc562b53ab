//! Products, averages, and roots over `f64` data.
//!
//! These functions follow native IEEE-754 semantics: an empty slice, a
//! zero degree, or a negative base produce whatever `+`, `/` and `powf`
//! produce (NaN, infinity, or an ordinary value), never an error. The one
//! exception is [`mean`], which indexes into the sorted input and has no
//! meaningful native result for an empty slice.
//!
//! # Ordering
//!
//! [`sorted`] orders NaN before every other value, including `-inf`, and
//! keeps equal elements in their input order. [`mean`] depends on this
//! ordering whenever its input contains NaN.

use std::cmp::Ordering;

use crate::error::{MathError, Result};

/// Multiplies all elements of `values`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `1.0` if `values` is empty.
///
/// # Examples
/// ```
/// use mathops::stats::product;
/// assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(product(&[]), 1.0);
/// ```
pub fn product(values: &[f64]) -> f64 {
    values.iter().fold(1.0_f64, |acc, &x| acc * x)
}

/// Returns a sorted copy of `values` in ascending order.
///
/// The input is not modified. NaN compares equal to NaN and less than any
/// other value; `-0.0` and `0.0` compare equal. The sort is stable.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use mathops::stats::sorted;
/// assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
/// ```
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(compare_nan_first);
    out
}

fn compare_nan_first(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Returns the element at index `len / 2` of the sorted input.
///
/// Despite the name this is neither the arithmetic mean (see [`average`])
/// nor a true median: for even-length input it picks the upper of the two
/// middle elements instead of averaging them.
///
/// # Complexity
/// Time: O(n log n) (dominated by sort), Space: O(n)
///
/// # Errors
/// [`MathError::EmptyInput`] if `values` is empty.
///
/// # Examples
/// ```
/// use mathops::stats::mean;
/// assert_eq!(mean(&[3.0, 1.0, 2.0]), Ok(2.0));
/// // Upper middle element, not 2.5.
/// assert_eq!(mean(&[4.0, 1.0, 3.0, 2.0]), Ok(3.0));
/// ```
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::EmptyInput);
    }
    let sorted = sorted(values);
    Ok(sorted[values.len() / 2])
}

/// Computes the arithmetic mean: the sum of `values` divided by their count.
///
/// Uses plain left-to-right summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - NaN if `values` is empty (`0.0 / 0.0`).
///
/// # Examples
/// ```
/// use mathops::stats::average;
/// assert_eq!(average(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(average(&[]).is_nan());
/// ```
pub fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the `degree`-th root of `value` as `value^(1 / degree)`.
///
/// No special cases: `degree == 0.0` raises to an infinite exponent, and a
/// negative `value` with a non-integer reciprocal exponent yields NaN, both
/// exactly as [`f64::powf`] defines them.
///
/// # Examples
/// ```
/// use mathops::stats::root;
/// assert!((root(27.0, 3.0) - 3.0).abs() < 1e-12);
/// assert!(root(-8.0, 3.0).is_nan());
/// assert_eq!(root(2.0, 0.0), f64::INFINITY);
/// ```
pub fn root(value: f64, degree: f64) -> f64 {
    value.powf(1.0 / degree)
}

/// Computes the geometric mean: the `n`-th root of the product of `n` values.
///
/// # Returns
/// - `1.0` if `values` is empty (`root(1.0, 0.0)`).
/// - NaN if the product is negative and `n` is not 1.
///
/// # Examples
/// ```
/// use mathops::stats::geometric_mean;
/// assert!((geometric_mean(&[4.0, 9.0]) - 6.0).abs() < 1e-12);
/// ```
pub fn geometric_mean(values: &[f64]) -> f64 {
    root(product(values), values.len() as f64)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Strategy for generating finite f64 vectors of reasonable size.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- sorted is ascending and a permutation of the input ---
        #[test]
        fn sorted_is_ascending_permutation(data in finite_vec(0, 100)) {
            let s = sorted(&data);
            prop_assert_eq!(s.len(), data.len());
            for w in s.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
            let mut expected = data.clone();
            expected.sort_by(|a, b| a.total_cmp(b));
            let mut actual = s.clone();
            actual.sort_by(|a, b| a.total_cmp(b));
            prop_assert_eq!(actual, expected);
        }

        // --- mean returns an element of the input ---
        #[test]
        fn mean_is_an_input_element(data in finite_vec(1, 100)) {
            let m = mean(&data).unwrap();
            prop_assert!(data.contains(&m));
        }

        // --- mean does not depend on input order ---
        #[test]
        fn mean_is_permutation_invariant(data in finite_vec(1, 100), seed in 0_u64..10000) {
            let mut shuffled = data.clone();
            let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
            shuffled.shuffle(&mut rng);
            prop_assert_eq!(mean(&data), mean(&shuffled));
        }

        // --- At least half the data lies at or above mean, half at or below ---
        #[test]
        fn mean_splits_data(data in finite_vec(1, 100)) {
            let m = mean(&data).unwrap();
            let n = data.len();
            let below = data.iter().filter(|&&x| x < m).count();
            let above = data.iter().filter(|&&x| x > m).count();
            prop_assert!(below <= n / 2);
            prop_assert!(above <= n - n / 2 - 1);
        }

        // --- min <= average <= max ---
        #[test]
        fn average_within_bounds(data in finite_vec(1, 100)) {
            let avg = average(&data);
            let mn = data.iter().copied().fold(f64::INFINITY, f64::min);
            let mx = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let tol = 1e-9 * mn.abs().max(mx.abs()).max(1.0);
            prop_assert!(avg >= mn - tol && avg <= mx + tol, "avg={} not in [{}, {}]", avg, mn, mx);
        }

        // --- AM-GM: geometric_mean <= average for positive data ---
        #[test]
        fn geometric_mean_at_most_average(
            data in proptest::collection::vec(0.1_f64..100.0, 1..=20)
        ) {
            let gm = geometric_mean(&data);
            let avg = average(&data);
            prop_assert!(gm <= avg * (1.0 + 1e-12), "gm={} > avg={}", gm, avg);
        }

        // --- root inverts integer powers ---
        #[test]
        fn root_inverts_powi(x in 0.0_f64..1e3, n in 1_i32..8) {
            let r = root(x.powi(n), n as f64);
            prop_assert!((r - x).abs() < 1e-9 * x.max(1.0), "root({}^{}, {}) = {}", x, n, n, r);
        }
    }
}

//! # mathops
//!
//! Elementary numeric operations over primitive inputs.
//!
//! Every function is pure: no state is read or written, inputs are borrowed
//! and never mutated, and identical inputs always produce identical outputs.
//!
//! ## Modules
//!
//! - [`ranges`] — Sums and products over inclusive integer ranges
//! - [`stats`] — Products, averages, roots, and geometric means of `f64` data
//! - [`combinatorics`] — Factorials, variations, and combinations
//! - [`error`] — [`MathError`], returned by the strict `try_`/`checked_` API
//!
//! ## Error conventions
//!
//! - **Floating point**: native IEEE-754 results (NaN, ±∞), never an error.
//! - **Integers**: 32-bit wrapping arithmetic; `-1` sentinel for invalid
//!   factorial, variation, and combination arguments.
//! - **Strict variants**: `checked_*` and `try_*` return [`MathError`] for
//!   overflow and invalid arguments instead.

pub mod combinatorics;
pub mod error;
pub mod ranges;
pub mod stats;

pub use combinatorics::{
    combination, factorial, try_combination, try_factorial, try_variation, variation,
};
pub use error::{MathError, Result};
pub use ranges::{checked_product_between, checked_sum_between, product_between, sum_between};
pub use stats::{average, geometric_mean, mean, product, root, sorted};

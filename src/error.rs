//! Error type for the strict (`try_` / `checked_`) operations.
//!
//! The compatibility functions keep their native semantics: floating-point
//! edge cases produce NaN or infinity, integer domain errors produce the
//! `-1` sentinel. [`MathError`] is returned only where no native result
//! exists (indexing into an empty slice) and by the strict variants, which
//! report every failure explicitly.

/// Error type for numeric operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The input slice is empty but the operation needs at least one element.
    EmptyInput,

    /// An argument that must be non-negative was negative.
    NegativeArgument(i32),

    /// More items were selected than are available.
    SelectionExceedsItems {
        /// Number of items available (`n`).
        items: i32,
        /// Number of items selected (`k`).
        selected: i32,
    },

    /// The result does not fit in a 32-bit signed integer.
    Overflow,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input is empty"),
            Self::NegativeArgument(value) => {
                write!(f, "argument must be non-negative, got {value}")
            }
            Self::SelectionExceedsItems { items, selected } => write!(
                f,
                "cannot select {selected} items from a collection of {items}"
            ),
            Self::Overflow => write!(f, "result overflows a 32-bit integer"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MathError>;

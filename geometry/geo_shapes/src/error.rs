//! The single error kind raised by shape constructors and setters.

use std::fmt;

use rust_decimal::Decimal;

/// Error raised when a shape is given an argument that violates its
/// invariants.
///
/// Raised synchronously at the point of violation: a failing constructor
/// rejects construction entirely, a failing setter leaves the previous
/// valid value unchanged. The message names the offending field and the
/// accepted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A named dimension was zero or negative.
    NonPositive {
        /// Field name as it appears in the shape's API.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },
    /// A color was empty after trimming leading and trailing whitespace.
    BlankColor,
    /// Three side lengths that cannot form a triangle.
    DegenerateSides {
        side1: Decimal,
        side2: Decimal,
        side3: Decimal,
    },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NonPositive { field, value } => {
                write!(f, "{field} must be greater than 0 (got {value})")
            }
            InvalidArgument::BlankColor => {
                write!(f, "color cannot be empty after trimming whitespace")
            }
            InvalidArgument::DegenerateSides {
                side1,
                side2,
                side3,
            } => write!(
                f,
                "sides {side1}, {side2}, {side3} do not satisfy the triangle inequality"
            ),
        }
    }
}

impl std::error::Error for InvalidArgument {}

/// Validate that a dimension is strictly positive.
///
/// Every constructor and setter funnels through this helper so the
/// positivity rule and its error message live in exactly one place.
pub(crate) fn require_positive(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, InvalidArgument> {
    if value <= Decimal::ZERO {
        tracing::debug!(field, %value, "rejected non-positive dimension");
        return Err(InvalidArgument::NonPositive { field, value });
    }
    Ok(value)
}

//! Geometric shape model with exact decimal arithmetic.
//!
//! This crate models a small closed set of shapes — [`Circle`],
//! [`Rectangle`], and [`Triangle`] — that share a presentation core
//! ([`Style`]: color + filled state) and expose computed geometric
//! properties through the [`Shape`] trait.
//!
//! # Design
//!
//! - **Validate at the boundary**: every constructor and setter enforces its
//!   invariants (positive dimensions, non-blank color, triangle inequality)
//!   and fails with [`InvalidArgument`] before any state changes. No partial
//!   or invalid instance ever exists.
//! - **Compute, never cache**: `area`, `perimeter`, and `diameter` are
//!   derived fresh on every call, so descriptions always reflect current
//!   field values.
//! - **Exact arithmetic**: all dimensions are [`Decimal`], not binary
//!   floats, so textbook inputs produce exact results
//!   (`Rectangle::new(3, 4)` has area exactly `12`).

mod circle;
mod error;
mod rect;
mod shape;
mod style;
mod triangle;

pub use circle::Circle;
pub use error::InvalidArgument;
pub use rect::Rectangle;
pub use shape::Shape;
pub use style::Style;
pub use triangle::Triangle;

// Re-exported so callers can construct dimensions without naming the
// arithmetic crate themselves.
pub use rust_decimal::Decimal;

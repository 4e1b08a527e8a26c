//! The polymorphic capability set shared by all shapes.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::InvalidArgument;
use crate::style::Style;

/// Common surface of every shape: presentation attributes plus computed
/// geometric properties.
///
/// The trait is object safe, so heterogeneous collections of
/// `Box<dyn Shape>` work wherever a shape is required.
///
/// Each implementor's `Display` output starts with its [`Style`] line
/// (`Color: ...    IsFilled: ...`) and appends the variant's own fields, so
/// [`Shape::describe`] composes by delegation rather than replacement.
pub trait Shape: fmt::Display {
    /// The shape's presentation attributes.
    fn style(&self) -> &Style;

    /// Mutable access to the presentation attributes.
    fn style_mut(&mut self) -> &mut Style;

    /// Enclosed area. Computed fresh on every call.
    fn area(&self) -> Decimal;

    /// Boundary length. Computed fresh on every call.
    fn perimeter(&self) -> Decimal;

    /// The shape's color.
    fn color(&self) -> &str {
        self.style().color()
    }

    /// Replace the color; fails on a blank value, keeping the old color.
    fn set_color(&mut self, color: &str) -> Result<(), InvalidArgument> {
        self.style_mut().set_color(color)
    }

    /// Whether the shape is filled.
    fn is_filled(&self) -> bool {
        self.style().is_filled()
    }

    /// Set the filled state.
    fn set_filled(&mut self, filled: bool) {
        self.style_mut().set_filled(filled);
    }

    /// Human-readable multi-line description of the shape's current state.
    fn describe(&self) -> String {
        self.to_string()
    }
}

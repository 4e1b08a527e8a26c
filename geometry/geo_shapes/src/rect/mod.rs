//! Rectangle: height and width plus the shared presentation core.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{require_positive, InvalidArgument};
use crate::shape::Shape;
use crate::style::Style;

/// A rectangle with strictly positive height and width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    style: Style,
    height: Decimal,
    width: Decimal,
}

impl Rectangle {
    /// Create a rectangle with the given dimensions and the default style.
    ///
    /// Each dimension is checked independently; the error names the one
    /// that failed.
    pub fn new(height: Decimal, width: Decimal) -> Result<Self, InvalidArgument> {
        Ok(Rectangle {
            style: Style::default(),
            height: require_positive("height", height)?,
            width: require_positive("width", width)?,
        })
    }

    /// Create a rectangle with an explicit color and filled state.
    pub fn with_style(
        height: Decimal,
        width: Decimal,
        color: &str,
        filled: bool,
    ) -> Result<Self, InvalidArgument> {
        Ok(Rectangle {
            style: Style::new(color, filled)?,
            height: require_positive("height", height)?,
            width: require_positive("width", width)?,
        })
    }

    /// The height.
    pub fn height(&self) -> Decimal {
        self.height
    }

    /// Replace the height; fails when `height <= 0`, keeping the old value.
    pub fn set_height(&mut self, height: Decimal) -> Result<(), InvalidArgument> {
        self.height = require_positive("height", height)?;
        Ok(())
    }

    /// The width.
    pub fn width(&self) -> Decimal {
        self.width
    }

    /// Replace the width; fails when `width <= 0`, keeping the old value.
    pub fn set_width(&mut self, width: Decimal) -> Result<(), InvalidArgument> {
        self.width = require_positive("width", width)?;
        Ok(())
    }
}

impl Default for Rectangle {
    /// Unit square with the default style.
    fn default() -> Self {
        Rectangle {
            style: Style::default(),
            height: Decimal::ONE,
            width: Decimal::ONE,
        }
    }
}

impl Shape for Rectangle {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// `height · width`.
    fn area(&self) -> Decimal {
        self.height * self.width
    }

    /// `2 · (height + width)`.
    fn perimeter(&self) -> Decimal {
        Decimal::TWO * (self.height + self.width)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nHeight: {}    Width: {}    Area: {}    Perimeter: {}",
            self.style,
            self.height,
            self.width,
            self.area(),
            self.perimeter()
        )
    }
}

#[cfg(test)]
mod tests;

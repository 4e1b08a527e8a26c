//! Circle: a radius plus the shared presentation core.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{require_positive, InvalidArgument};
use crate::shape::Shape;
use crate::style::Style;

/// A circle with a strictly positive radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    style: Style,
    radius: Decimal,
}

impl Circle {
    /// Create a circle with the given radius and the default style.
    ///
    /// Fails when `radius <= 0`.
    pub fn new(radius: Decimal) -> Result<Self, InvalidArgument> {
        Ok(Circle {
            style: Style::default(),
            radius: require_positive("radius", radius)?,
        })
    }

    /// Create a circle with an explicit color and filled state.
    pub fn with_style(
        radius: Decimal,
        color: &str,
        filled: bool,
    ) -> Result<Self, InvalidArgument> {
        Ok(Circle {
            style: Style::new(color, filled)?,
            radius: require_positive("radius", radius)?,
        })
    }

    /// The radius.
    pub fn radius(&self) -> Decimal {
        self.radius
    }

    /// Replace the radius; fails when `radius <= 0`, keeping the old value.
    pub fn set_radius(&mut self, radius: Decimal) -> Result<(), InvalidArgument> {
        self.radius = require_positive("radius", radius)?;
        Ok(())
    }

    /// Diameter, `2 · radius`. Derived, never stored.
    pub fn diameter(&self) -> Decimal {
        Decimal::TWO * self.radius
    }
}

impl Default for Circle {
    /// Unit circle with the default style.
    fn default() -> Self {
        Circle {
            style: Style::default(),
            radius: Decimal::ONE,
        }
    }
}

impl Shape for Circle {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// `π · r²`.
    fn area(&self) -> Decimal {
        Decimal::PI * self.radius * self.radius
    }

    /// `2π · r`.
    fn perimeter(&self) -> Decimal {
        Decimal::TWO_PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nRadius: {}    Area: {}    Perimeter: {}    Diameter: {}",
            self.style,
            self.radius,
            self.area(),
            self.perimeter(),
            self.diameter()
        )
    }
}

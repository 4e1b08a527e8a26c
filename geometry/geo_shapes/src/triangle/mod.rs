//! Triangle: three sides plus the shared presentation core.

use std::fmt;

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{require_positive, InvalidArgument};
use crate::shape::Shape;
use crate::style::Style;

/// A triangle with three strictly positive sides satisfying the triangle
/// inequality.
///
/// Degenerate side combinations (any side at least as long as the other two
/// combined) are rejected at construction and mutation time, so
/// [`Shape::area`] is total: the Heron radicand is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    style: Style,
    side1: Decimal,
    side2: Decimal,
    side3: Decimal,
}

impl Triangle {
    /// Create a triangle with the given sides and the default style.
    ///
    /// Each side is checked independently; the error names the side that
    /// failed. Sides that cannot form a triangle fail with
    /// [`InvalidArgument::DegenerateSides`].
    pub fn new(
        side1: Decimal,
        side2: Decimal,
        side3: Decimal,
    ) -> Result<Self, InvalidArgument> {
        Self::with_parts(Style::default(), side1, side2, side3)
    }

    /// Create a triangle with an explicit color and filled state.
    pub fn with_style(
        side1: Decimal,
        side2: Decimal,
        side3: Decimal,
        color: &str,
        filled: bool,
    ) -> Result<Self, InvalidArgument> {
        Self::with_parts(Style::new(color, filled)?, side1, side2, side3)
    }

    fn with_parts(
        style: Style,
        side1: Decimal,
        side2: Decimal,
        side3: Decimal,
    ) -> Result<Self, InvalidArgument> {
        require_positive("side1", side1)?;
        require_positive("side2", side2)?;
        require_positive("side3", side3)?;
        require_triangle(side1, side2, side3)?;
        Ok(Triangle {
            style,
            side1,
            side2,
            side3,
        })
    }

    /// Side 1.
    pub fn side1(&self) -> Decimal {
        self.side1
    }

    /// Replace side 1; the new value must be positive and must keep the
    /// three sides a valid triangle, otherwise the old value survives.
    pub fn set_side1(&mut self, side1: Decimal) -> Result<(), InvalidArgument> {
        require_positive("side1", side1)?;
        require_triangle(side1, self.side2, self.side3)?;
        self.side1 = side1;
        Ok(())
    }

    /// Side 2.
    pub fn side2(&self) -> Decimal {
        self.side2
    }

    /// Replace side 2; same rules as [`Triangle::set_side1`].
    pub fn set_side2(&mut self, side2: Decimal) -> Result<(), InvalidArgument> {
        require_positive("side2", side2)?;
        require_triangle(self.side1, side2, self.side3)?;
        self.side2 = side2;
        Ok(())
    }

    /// Side 3.
    pub fn side3(&self) -> Decimal {
        self.side3
    }

    /// Replace side 3; same rules as [`Triangle::set_side1`].
    pub fn set_side3(&mut self, side3: Decimal) -> Result<(), InvalidArgument> {
        require_positive("side3", side3)?;
        require_triangle(self.side1, self.side2, side3)?;
        self.side3 = side3;
        Ok(())
    }
}

impl Default for Triangle {
    /// Equilateral unit triangle with the default style.
    fn default() -> Self {
        Triangle {
            style: Style::default(),
            side1: Decimal::ONE,
            side2: Decimal::ONE,
            side3: Decimal::ONE,
        }
    }
}

impl Shape for Triangle {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Heron's formula: `sqrt(s·(s-a)·(s-b)·(s-c))` with `s` the
    /// semi-perimeter.
    fn area(&self) -> Decimal {
        let s = self.perimeter() / Decimal::TWO;
        let radicand = s * (s - self.side1) * (s - self.side2) * (s - self.side3);
        // The radicand is non-negative once the triangle inequality holds,
        // so sqrt always yields a value.
        radicand.sqrt().unwrap_or(Decimal::ZERO)
    }

    /// `side1 + side2 + side3`.
    fn perimeter(&self) -> Decimal {
        self.side1 + self.side2 + self.side3
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nSide1: {}    Side2: {}    Side3: {}    Area: {}    Perimeter: {}",
            self.style,
            self.side1,
            self.side2,
            self.side3,
            self.area(),
            self.perimeter()
        )
    }
}

/// Validate the triangle inequality: every side strictly shorter than the
/// other two combined.
fn require_triangle(
    side1: Decimal,
    side2: Decimal,
    side3: Decimal,
) -> Result<(), InvalidArgument> {
    if side1 >= side2 + side3 || side2 >= side1 + side3 || side3 >= side1 + side2 {
        tracing::debug!(%side1, %side2, %side3, "rejected degenerate sides");
        return Err(InvalidArgument::DegenerateSides {
            side1,
            side2,
            side3,
        });
    }
    Ok(())
}

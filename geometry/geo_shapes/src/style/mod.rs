//! Presentation attributes shared by every shape.

use std::fmt;

use crate::error::InvalidArgument;

/// Color and filled state carried by every shape.
///
/// The color is always non-empty: it is trimmed on the way in and rejected
/// with [`InvalidArgument::BlankColor`] when nothing remains. The trimmed
/// form is what gets stored, so `color()` never returns surrounding
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    color: String,
    filled: bool,
}

impl Style {
    /// Create a style with the given color and filled state.
    ///
    /// Fails when `color` is empty after trimming whitespace.
    pub fn new(color: &str, filled: bool) -> Result<Self, InvalidArgument> {
        let color = trimmed_color(color)?;
        Ok(Style { color, filled })
    }

    /// The shape's color, stored trimmed.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replace the color, keeping the previous value when `color` is blank.
    pub fn set_color(&mut self, color: &str) -> Result<(), InvalidArgument> {
        self.color = trimmed_color(color)?;
        Ok(())
    }

    /// Whether the shape is filled.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Set the filled state. Unconstrained.
    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }
}

impl Default for Style {
    /// White and not filled.
    fn default() -> Self {
        Style {
            color: String::from("White"),
            filled: false,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color: {}    IsFilled: {}", self.color, self.filled)
    }
}

fn trimmed_color(color: &str) -> Result<String, InvalidArgument> {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        tracing::debug!("rejected blank color");
        return Err(InvalidArgument::BlankColor);
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests;

use std::io::{self, Write};

use tracing::debug;

use super::sealed::Placement;
use super::{require_positive, Position, Shape, ShapeBase};
use crate::error::Result;

/// Triangle described by base and height.
///
/// The perimeter treats base and height as the legs of a right triangle, so
/// it is only exact for right triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    base: ShapeBase,
    base_len: f64,
    height: f64,
}

impl Triangle {
    pub fn new(name: impl Into<String>, base: f64, height: f64) -> Self {
        let shared = ShapeBase::new(name, Position::ORIGIN);
        debug!(shape = %shared.name(), base, height, "triangle constructed");
        Self {
            base: shared,
            base_len: base,
            height,
        }
    }

    pub fn try_new(name: impl Into<String>, base: f64, height: f64) -> Result<Self> {
        let name = name.into();
        let base = require_positive(&name, "base", base)?;
        let height = require_positive(&name, "height", height)?;
        Ok(Self::new(name, base, height))
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.base.position = Position::new(x, y);
        self
    }

    pub fn base_length(&self) -> f64 {
        self.base_len
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn hypotenuse(&self) -> f64 {
        self.base_len.hypot(self.height)
    }
}

impl Placement for Triangle {
    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        debug!(shape = %self.base.name(), "triangle dropped");
    }
}

impl Shape for Triangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn area(&self) -> f64 {
        0.5 * self.base_len * self.height
    }

    fn perimeter(&self) -> f64 {
        self.base_len + self.height + self.hypotenuse()
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "  Drawing a triangle with base {} and height {}",
            self.base_len, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        let tri = Triangle::new("MyTriangle", 3.0, 4.0);
        assert_eq!(tri.area(), 6.0);
        assert!((tri.hypotenuse() - 5.0).abs() < 1e-12);
        assert!((tri.perimeter() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn draw_mentions_base_and_height() {
        let mut out = Vec::new();
        Triangle::new("t", 4.0, 3.0).draw(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Drawing a triangle with base 4 and height 3\n"
        );
    }
}

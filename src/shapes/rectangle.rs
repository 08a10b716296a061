use std::io::{self, Write};

use tracing::debug;

use super::sealed::Placement;
use super::{require_positive, Position, Shape, ShapeBase};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: ShapeBase,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        let base = ShapeBase::new(name, Position::ORIGIN);
        debug!(shape = %base.name(), width, height, "rectangle constructed");
        Self {
            base,
            width,
            height,
        }
    }

    pub fn try_new(name: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        let name = name.into();
        let width = require_positive(&name, "width", width)?;
        let height = require_positive(&name, "height", height)?;
        Ok(Self::new(name, width, height))
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.base.position = Position::new(x, y);
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Placement for Rectangle {
    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }
}

impl Drop for Rectangle {
    fn drop(&mut self) {
        debug!(shape = %self.base.name(), "rectangle dropped");
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Drawing a rectangle {}x{}", self.width, self.height)
    }
}

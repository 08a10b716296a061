use std::f64::consts::PI;
use std::io::{self, Write};

use tracing::debug;

use super::sealed::Placement;
use super::{require_positive, Position, Shape, ShapeBase};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    base: ShapeBase,
    radius: f64,
}

impl Circle {
    /// New circle at the origin. The radius is taken as given.
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        let base = ShapeBase::new(name, Position::ORIGIN);
        debug!(shape = %base.name(), radius, "circle constructed");
        Self { base, radius }
    }

    /// Like [`Circle::new`] but rejects a radius that is not positive.
    pub fn try_new(name: impl Into<String>, radius: f64) -> Result<Self> {
        let name = name.into();
        let radius = require_positive(&name, "radius", radius)?;
        Ok(Self::new(name, radius))
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.base.position = Position::new(x, y);
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Placement for Circle {
    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }
}

impl Drop for Circle {
    fn drop(&mut self) {
        debug!(shape = %self.base.name(), "circle dropped");
    }
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Drawing a circle with radius {}", self.radius)
    }

    fn after_move(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Circle-specific move completed")
    }
}

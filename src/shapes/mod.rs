//! # Shapes and Runtime Dispatch
//!
//! A small shape hierarchy expressed with traits:
//!
//! - [`Shape`] is the capability set every variant implements (area,
//!   perimeter, draw, and an optional post-move hook).
//! - [`ShapeExt`] holds the operations that must behave identically for every
//!   variant (`display_info`, `move_to`). It has a blanket impl, so no variant
//!   can override them.
//! - [`ShapeBase`] is the shared state (name and position) each variant embeds
//!   by composition.
//!
//! Collections hold `Box<dyn Shape>` and are driven through [`dispatch`].

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::error::{LessonError, Result};

mod circle;
pub mod dispatch;
mod rectangle;
pub mod scene;
mod triangle;

pub use circle::Circle;
pub use dispatch::{demonstrate_polymorphism, total_area};
pub use rectangle::Rectangle;
pub use scene::{Scene, ShapeSpec};
pub use triangle::Triangle;

// =============================================================================
// Position and shared state
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity and placement shared by every shape variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBase {
    name: String,
    position: Position,
}

impl ShapeBase {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        let name = name.into();
        debug!(shape = %name, "shape constructed");
        Self { name, position }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Runs after the owning variant's own `Drop`, so teardown reads
/// variant first, then base.
impl Drop for ShapeBase {
    fn drop(&mut self) {
        debug!(shape = %self.name, "shape dropped");
    }
}

mod sealed {
    use super::ShapeBase;

    /// Write access to the shared state. Only this crate can name it, so
    /// outside code repositions shapes through [`super::ShapeExt::move_to`].
    pub trait Placement {
        fn base_mut(&mut self) -> &mut ShapeBase;
    }
}

// =============================================================================
// Capability set
// =============================================================================

/// Operations each variant supplies. Callers use these through `dyn Shape`
/// and never need to know the concrete type.
///
/// The trait is sealed: the shared state can only be changed by
/// [`ShapeExt::move_to`].
///
/// ```compile_fail
/// use lessons::shapes::Circle;
///
/// let mut circle = Circle::new("c", 1.0);
/// circle.base_mut();
/// ```
pub trait Shape: fmt::Debug + sealed::Placement {
    fn base(&self) -> &ShapeBase;

    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;

    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Variant-specific follow-up to [`ShapeExt::move_to`]. Runs after the
    /// shared repositioning has already been applied.
    fn after_move(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Fixed operations built on top of [`Shape`].
///
/// The blanket impl below is the only impl this trait can have, so every
/// shape (sized or `dyn`) gets exactly these bodies.
pub trait ShapeExt: Shape {
    fn name(&self) -> &str {
        self.base().name()
    }

    fn position(&self) -> Position {
        self.base().position()
    }

    /// Render name, position, area and perimeter the same way for any variant.
    fn display_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Shape: {} at {}", self.name(), self.position())?;
        writeln!(out, "    Area: {:.2}", self.area())?;
        writeln!(out, "    Perimeter: {:.2}", self.perimeter())
    }

    /// Reposition the shape, report it, then hand over to the variant's
    /// [`Shape::after_move`] hook.
    fn move_to(&mut self, x: f64, y: f64, out: &mut dyn Write) -> io::Result<()> {
        let base = self.base_mut();
        let from = base.position;
        base.position = Position::new(x, y);
        debug!(shape = %base.name, %from, to = %base.position, "moved shape");
        writeln!(out, "  {} moved to {}", base.name, base.position)?;
        self.after_move(out)
    }
}

impl<S: Shape + ?Sized> ShapeExt for S {}

/// Check a dimension read from outside the program.
pub(crate) fn require_positive(shape: &str, dimension: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LessonError::invalid_geometry(shape, dimension, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn position_display_drops_trailing_zeroes() {
        assert_eq!(Position::new(10.0, 2.5).to_string(), "(10, 2.5)");
        assert_eq!(Position::ORIGIN.offset(1.0, -1.0), Position::new(1.0, -1.0));
    }

    #[test]
    fn display_info_is_uniform_across_variants() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new("C", 1.0)),
            Box::new(Rectangle::new("R", 2.0, 3.0).at(1.0, 1.0)),
            Box::new(Triangle::new("T", 3.0, 4.0)),
        ];

        for shape in &shapes {
            let text = render(|out| shape.display_info(out));
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 3);
            assert!(lines[0].starts_with(&format!("  Shape: {} at ", shape.name())));
            assert_eq!(lines[1], format!("    Area: {:.2}", shape.area()));
            assert_eq!(lines[2], format!("    Perimeter: {:.2}", shape.perimeter()));
        }
    }

    #[test]
    fn move_to_reports_new_position() {
        let mut rect = Rectangle::new("Box", 4.0, 6.0).at(10.0, 10.0);
        let text = render(|out| rect.move_to(20.0, 20.0, out));
        assert_eq!(text, "  Box moved to (20, 20)\n");
        assert_eq!(rect.position(), Position::new(20.0, 20.0));
    }

    #[test]
    fn circle_hook_runs_after_base_move() {
        let mut circle: Box<dyn Shape> = Box::new(Circle::new("Wheel", 5.0));
        let text = render(|out| circle.move_to(10.0, 10.0, out));
        assert_eq!(
            text,
            "  Wheel moved to (10, 10)\n  Circle-specific move completed\n"
        );
    }

    #[test]
    fn variant_drops_before_its_base() {
        let logs = crate::telemetry::capture(|| {
            let boxed: Box<dyn Shape> = Box::new(Circle::new("Wheel", 1.0));
            drop(boxed);
        });

        let base_built = logs.find("shape constructed").unwrap();
        let circle_built = logs.find("circle constructed").unwrap();
        let circle_dropped = logs.find("circle dropped").unwrap();
        let base_dropped = logs.find("shape dropped").unwrap();
        assert!(base_built < circle_built);
        assert!(circle_built < circle_dropped);
        assert!(circle_dropped < base_dropped);
    }

    #[test]
    fn require_positive_rejects_zero_negative_and_nan() {
        assert_eq!(require_positive("s", "radius", 2.0).unwrap(), 2.0);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                require_positive("s", "radius", bad),
                Err(LessonError::InvalidGeometry { dimension: "radius", .. })
            ));
        }
    }
}

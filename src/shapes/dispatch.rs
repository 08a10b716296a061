//! Operations over heterogeneous shape collections.
//!
//! Nothing here knows which variants exist; everything goes through the
//! `Shape` vtable.

use std::io::{self, Write};

use tracing::debug;

use super::{Shape, ShapeExt};

/// Offset applied by [`demonstrate_polymorphism`] on each move.
pub const MOVE_STEP: f64 = 10.0;

/// Show, draw, then nudge every shape by `(+10, +10)`, in order.
pub fn demonstrate_polymorphism(shapes: &mut [Box<dyn Shape>], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "  === Polymorphism Demonstration ===")?;

    for shape in shapes.iter_mut() {
        writeln!(out)?;
        shape.display_info(out)?;
        shape.draw(out)?;
        let target = shape.position().offset(MOVE_STEP, MOVE_STEP);
        shape.move_to(target.x, target.y, out)?;
    }

    debug!(count = shapes.len(), "demonstrated dispatch over collection");
    Ok(())
}

/// Sum of every shape's area. An empty collection totals `0.0`.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().fold(0.0, |total, shape| total + shape.area())
}

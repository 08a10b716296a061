//! Runtime polymorphism with trait objects, using [`crate::shapes`].
//!
//! Run with: cargo run --bin oop_polymorphism

use std::io::Write;

use tracing::error;

use crate::console::{banner, section};
use crate::error::Result;
use crate::shapes::{demonstrate_polymorphism, total_area, Circle, Rectangle, Scene, Shape, ShapeExt, Triangle};

/// Run the lesson with the scene from `LESSONS_SCENE`, or the builtin one.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let scene = Scene::from_env().map_err(|err| {
        error!(%err, "could not load scene");
        err
    })?;
    run_with_scene(scene, out)
}

/// Every section except the boxed one works on the same shapes, so moves
/// made in section 3 show up in the later sections.
pub fn run_with_scene(scene: Scene, out: &mut dyn Write) -> Result<()> {
    banner(out, "Polymorphism")?;

    section(out, 1, "Creating shape objects")?;
    let mut shapes = scene.into_shapes()?;
    for shape in &shapes {
        writeln!(out, "  Created {} at {}", shape.name(), shape.position())?;
    }
    writeln!(out)?;

    section(out, 2, "Direct object calls")?;
    for shape in &shapes {
        shape.display_info(out)?;
    }
    writeln!(out)?;

    section(out, 3, "Dispatch over a collection")?;
    demonstrate_polymorphism(&mut shapes, out)?;
    writeln!(out)?;

    section(out, 4, "Boxed trait objects")?;
    let dynamic_shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new("DynamicCircle", 3.0)),
        Box::new(Rectangle::new("DynamicRectangle", 5.0, 3.0)),
        Box::new(Triangle::new("DynamicTriangle", 4.0, 3.0)),
    ];
    for shape in &dynamic_shapes {
        shape.display_info(out)?;
        shape.draw(out)?;
    }
    writeln!(out, "  Dropping the boxes runs each variant's Drop, then its base's")?;
    drop(dynamic_shapes);
    writeln!(out)?;

    section(out, 5, "Trait object references")?;
    for shape in shapes.iter().take(2) {
        let by_ref: &dyn Shape = &**shape;
        writeln!(out, "  {} via reference:", by_ref.name())?;
        by_ref.display_info(out)?;
        by_ref.draw(out)?;
    }
    writeln!(out)?;

    section(out, 6, "Function over the collection")?;
    writeln!(out, "  Total area of all shapes: {:.2}", total_area(&shapes))?;
    writeln!(out)?;

    section(out, 7, "Per-shape dispatch")?;
    for shape in &shapes {
        writeln!(out, "  {} area calculation: {:.2}", shape.name(), shape.area())?;
    }
    writeln!(out)?;

    section(out, 8, "Array of trait objects")?;
    let refs: Vec<&dyn Shape> = shapes.iter().map(|shape| &**shape).collect();
    for (i, shape) in refs.iter().enumerate() {
        write!(out, "  Shape {}: ", i + 1)?;
        shape.draw(out)?;
    }
    writeln!(out)?;

    banner(out, "End of Polymorphism Example")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(scene: Scene) -> String {
        let mut out = Vec::new();
        run_with_scene(scene, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn builtin_scene_run() {
        let text = transcript(Scene::builtin().unwrap());

        assert!(text.contains("Created MyRectangle at (10, 10)"));
        assert!(text.contains("Total area of all shapes: 108.54"));
        assert!(text.contains("MyCircle moved to (10, 10)"));
        assert!(text.contains("Drawing a triangle with base 4 and height 3"));
        assert!(text.contains("  Shape 3:   Drawing a triangle with base 3 and height 4\n"));
    }

    #[test]
    fn references_observe_earlier_moves() {
        let text = transcript(Scene::builtin().unwrap());
        assert!(text.contains("  MyCircle via reference:\n  Shape: MyCircle at (10, 10)\n"));
        assert!(text.contains("  MyRectangle via reference:\n  Shape: MyRectangle at (20, 20)\n"));
    }

    #[test]
    fn every_section_follows_the_scene() {
        let empty = transcript(Scene::from_toml_str("").unwrap());
        assert!(!empty.contains("MyCircle"));
        assert!(!empty.contains("via reference"));
        assert!(empty.contains("Total area of all shapes: 0.00"));

        let custom = transcript(
            Scene::from_toml_str(
                r#"
                [[shapes]]
                kind = "circle"
                name = "Sun"
                radius = 1.0
                "#,
            )
            .unwrap(),
        );
        assert!(custom.contains("  Sun via reference:\n  Shape: Sun at (10, 10)\n"));
        assert!(custom.contains("  Shape 1:   Drawing a circle with radius 1\n"));
    }

    #[test]
    fn boxed_shapes_drop_variant_then_base() {
        let logs = crate::telemetry::capture(|| {
            transcript(Scene::builtin().unwrap());
        });
        let line_of = |event: &str| {
            logs.lines()
                .position(|line| line.contains(event) && line.contains("DynamicCircle"))
                .unwrap()
        };
        assert!(line_of("circle constructed") < line_of("circle dropped"));
        assert!(line_of("circle dropped") < line_of("shape dropped"));
    }

    #[test]
    fn run_defaults_to_builtin_scene() {
        if std::env::var_os(crate::shapes::scene::SCENE_ENV).is_some() {
            return;
        }
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total area of all shapes: 108.54"));
    }

    #[test]
    fn invalid_scene_fails_before_output_of_collection() {
        let scene = Scene::from_toml_str(
            r#"
            [[shapes]]
            kind = "triangle"
            name = "Flat"
            base = 3.0
            height = -4.0
            "#,
        )
        .unwrap();
        let mut out = Vec::new();
        let err = run_with_scene(scene, &mut out).unwrap_err();
        assert!(err.to_string().contains("Flat"));
    }
}

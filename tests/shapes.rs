// Property and file-based tests for the shape lesson.

use std::fs;

use lessons::shapes::{total_area, Circle, Position, Rectangle, Scene, Shape, ShapeExt, Triangle};
use lessons::LessonError;
use proptest::prelude::*;

fn dimension() -> impl Strategy<Value = f64> {
    0.001f64..1_000.0
}

fn coordinate() -> impl Strategy<Value = f64> {
    -1_000.0f64..1_000.0
}

prop_compose! {
    fn any_shape()(kind in 0..3u8, a in dimension(), b in dimension(), x in coordinate(), y in coordinate())
        -> Box<dyn Shape>
    {
        match kind {
            0 => Box::new(Circle::new("c", a).at(x, y)) as Box<dyn Shape>,
            1 => Box::new(Rectangle::new("r", a, b).at(x, y)),
            _ => Box::new(Triangle::new("t", a, b).at(x, y)),
        }
    }
}

proptest! {
    #[test]
    fn move_shifts_position_and_keeps_measurements(mut shape in any_shape()) {
        let before = shape.position();
        let (area, perimeter) = (shape.area(), shape.perimeter());

        let mut sink = Vec::new();
        shape.move_to(before.x + 10.0, before.y + 10.0, &mut sink).unwrap();

        prop_assert_eq!(shape.position(), Position::new(before.x + 10.0, before.y + 10.0));
        prop_assert_eq!(shape.area(), area);
        prop_assert_eq!(shape.perimeter(), perimeter);
    }

    #[test]
    fn trait_object_matches_concrete_circle(r in dimension()) {
        let circle = Circle::new("c", r);
        let dynamic: &dyn Shape = &circle;
        prop_assert_eq!(dynamic.area(), circle.area());
        prop_assert_eq!(dynamic.perimeter(), circle.perimeter());
        prop_assert_eq!(dynamic.perimeter(), 2.0 * std::f64::consts::PI * r);
    }

    #[test]
    fn trait_object_matches_concrete_rectangle(w in dimension(), h in dimension()) {
        let rect = Rectangle::new("r", w, h);
        let dynamic: &dyn Shape = &rect;
        prop_assert_eq!(dynamic.area(), rect.area());
        prop_assert_eq!(dynamic.perimeter(), rect.perimeter());
        prop_assert_eq!(dynamic.area(), w * h);
    }

    #[test]
    fn trait_object_matches_concrete_triangle(b in dimension(), h in dimension()) {
        let tri = Triangle::new("t", b, h);
        let dynamic: &dyn Shape = &tri;
        prop_assert_eq!(dynamic.area(), tri.area());
        prop_assert_eq!(dynamic.perimeter(), tri.perimeter());
        prop_assert!(tri.perimeter() > tri.hypotenuse());
    }

    #[test]
    fn total_area_is_sum_of_parts(shapes in prop::collection::vec(any_shape(), 0..8)) {
        let expected: f64 = shapes.iter().map(|s| s.area()).sum();
        prop_assert_eq!(total_area(&shapes), expected);
    }
}

#[test]
fn lesson_shapes_have_expected_measurements() {
    let circle = Circle::new("MyCircle", 5.0);
    let rectangle = Rectangle::new("MyRectangle", 4.0, 6.0);
    let triangle = Triangle::new("MyTriangle", 3.0, 4.0);

    assert!((circle.area() - 78.5398).abs() < 1e-3);
    assert!((circle.perimeter() - 31.4159).abs() < 1e-3);
    assert_eq!(rectangle.area(), 24.0);
    assert_eq!(rectangle.perimeter(), 20.0);
    assert_eq!(triangle.area(), 6.0);
    assert!((triangle.perimeter() - 12.0).abs() < 1e-12);

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(circle), Box::new(rectangle), Box::new(triangle)];
    assert!((total_area(&shapes) - 108.5398).abs() < 1e-3);
}

#[test]
fn load_toml_scene_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.toml");
    fs::write(
        &path,
        r#"
        [[shapes]]
        kind = "circle"
        name = "Sun"
        radius = 2.0
        x = 5.0
        y = 5.0
        "#,
    )
    .unwrap();

    let shapes = Scene::load(&path).unwrap().into_shapes().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].name(), "Sun");
    assert_eq!(shapes[0].position(), Position::new(5.0, 5.0));
}

#[test]
fn load_json_scene_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    fs::write(
        &path,
        r#"{"shapes": [{"kind": "rectangle", "name": "Door", "width": 1.0, "height": 2.0}]}"#,
    )
    .unwrap();

    let scene = Scene::load(&path).unwrap();
    assert_eq!(scene.shapes.len(), 1);
    assert_eq!(scene.shapes[0].name(), "Door");
}

#[test]
fn missing_scene_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Scene::load(&path).unwrap_err();
    assert!(matches!(err, LessonError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

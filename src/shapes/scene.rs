//! Scene files: a list of shapes described in TOML or JSON.
//!
//! ```toml
//! [[shapes]]
//! kind = "circle"
//! name = "MyCircle"
//! radius = 5.0
//! x = 0.0
//! y = 0.0
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Circle, Rectangle, Shape, Triangle};
use crate::error::{LessonError, Result};

/// Environment variable naming a scene file to use instead of the builtin one.
pub const SCENE_ENV: &str = "LESSONS_SCENE";

const BUILTIN_SCENE: &str = include_str!("../../scenes/default.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Circle {
        name: String,
        radius: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Rectangle {
        name: String,
        width: f64,
        height: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Triangle {
        name: String,
        base: f64,
        height: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
}

impl ShapeSpec {
    /// Validate the dimensions and build the matching variant.
    pub fn build(&self) -> Result<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match self {
            ShapeSpec::Circle { name, radius, x, y } => {
                Box::new(Circle::try_new(name.as_str(), *radius)?.at(*x, *y))
            }
            ShapeSpec::Rectangle {
                name,
                width,
                height,
                x,
                y,
            } => Box::new(Rectangle::try_new(name.as_str(), *width, *height)?.at(*x, *y)),
            ShapeSpec::Triangle {
                name,
                base,
                height,
                x,
                y,
            } => Box::new(Triangle::try_new(name.as_str(), *base, *height)?.at(*x, *y)),
        };
        Ok(shape)
    }

    pub fn name(&self) -> &str {
        match self {
            ShapeSpec::Circle { name, .. }
            | ShapeSpec::Rectangle { name, .. }
            | ShapeSpec::Triangle { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

impl Scene {
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SCENE)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a scene file. `.json` files are parsed as JSON, everything else
    /// as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| LessonError::io(path, e))?;

        let scene = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&contents)?,
            _ => Self::from_toml_str(&contents)?,
        };
        info!(path = %path.display(), shapes = scene.shapes.len(), "loaded scene");
        Ok(scene)
    }

    /// The scene named by `LESSONS_SCENE`, or the builtin one.
    pub fn from_env() -> Result<Self> {
        match env::var_os(SCENE_ENV) {
            Some(path) => Self::load(path),
            None => {
                debug!("{SCENE_ENV} not set, using builtin scene");
                Self::builtin()
            }
        }
    }

    pub fn into_shapes(self) -> Result<Vec<Box<dyn Shape>>> {
        self.shapes.iter().map(ShapeSpec::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{total_area, Position, ShapeExt};

    #[test]
    fn builtin_scene_matches_lesson_shapes() {
        let scene = Scene::builtin().unwrap();
        let names: Vec<&str> = scene.shapes.iter().map(ShapeSpec::name).collect();
        assert_eq!(names, ["MyCircle", "MyRectangle", "MyTriangle"]);

        let shapes = scene.into_shapes().unwrap();
        assert_eq!(shapes[0].position(), Position::ORIGIN);
        assert_eq!(shapes[1].position(), Position::new(10.0, 10.0));
        assert_eq!(shapes[2].position(), Position::new(20.0, 20.0));
        assert!((total_area(&shapes) - 108.5398).abs() < 1e-3);
    }

    #[test]
    fn position_defaults_to_origin() {
        let scene = Scene::from_toml_str(
            r#"
            [[shapes]]
            kind = "rectangle"
            name = "Door"
            width = 1.0
            height = 2.0
            "#,
        )
        .unwrap();
        let shapes = scene.into_shapes().unwrap();
        assert_eq!(shapes[0].position(), Position::ORIGIN);
        assert_eq!(shapes[0].area(), 2.0);
    }

    #[test]
    fn json_scene_parses() {
        let scene = Scene::from_json_str(
            r#"{"shapes": [{"kind": "triangle", "name": "Ramp", "base": 6.0, "height": 8.0, "x": 1.0}]}"#,
        )
        .unwrap();
        assert_eq!(
            scene.shapes[0],
            ShapeSpec::Triangle {
                name: "Ramp".into(),
                base: 6.0,
                height: 8.0,
                x: 1.0,
                y: 0.0,
            }
        );
    }

    #[test]
    fn non_positive_dimension_is_rejected() {
        let scene = Scene::from_toml_str(
            r#"
            [[shapes]]
            kind = "circle"
            name = "Dot"
            radius = 0.0
            "#,
        )
        .unwrap();
        let err = scene.into_shapes().err().unwrap();
        assert!(matches!(
            err,
            LessonError::InvalidGeometry { ref shape, dimension: "radius", .. } if shape == "Dot"
        ));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = Scene::from_toml_str(
            r#"
            [[shapes]]
            kind = "hexagon"
            name = "Nut"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LessonError::Toml(_)));
    }

    #[test]
    fn empty_scene_is_allowed() {
        let scene = Scene::from_toml_str("").unwrap();
        assert!(scene.into_shapes().unwrap().is_empty());
    }
}

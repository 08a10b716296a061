use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
///
/// Lesson drivers mostly deal in `io::Result`; this enum covers the places
/// where data comes from outside the program (scene files) or where a lesson
/// demonstrates validation.
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("invalid geometry for {shape}: {dimension} must be positive and finite, got {value}")]
    InvalidGeometry {
        shape: String,
        dimension: &'static str,
        value: f64,
    },

    #[error("grade {0} is outside the range 0..=100")]
    GradeOutOfRange(f64),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML scene: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    StdIo(#[from] io::Error),
}

impl LessonError {
    pub fn invalid_geometry(shape: impl Into<String>, dimension: &'static str, value: f64) -> Self {
        Self::InvalidGeometry {
            shape: shape.into(),
            dimension,
            value,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

//! # Rust Lessons
//!
//! Small, self-contained lessons on core language features. Each lesson has a
//! module with a `run` function that writes the lesson to any `io::Write`, and
//! a binary under `src/bin/` that runs it against stdout.
//!
//! ## Basics
//! - [`basics::variables`], [`basics::loops`], [`basics::functions`]
//!
//! ## Structs and traits
//! - [`oop::classes`]: private state, constructors, `Clone` and `Drop`
//! - [`oop::inheritance`]: traits and composition instead of class hierarchies
//! - [`oop::polymorphism`] on top of [`shapes`]: runtime dispatch over
//!   heterogeneous collections
//!
//! ## Collections
//! - [`collections::containers`], [`collections::algorithms`]
//!
//! Run a lesson with: `cargo run --bin <name>` (see [`launcher::LESSONS`]).

pub mod basics;
pub mod collections;
pub mod console;
pub mod error;
pub mod launcher;
pub mod oop;
pub mod shapes;
pub mod telemetry;

pub use error::{LessonError, Result};

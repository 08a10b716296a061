//! # Structs, Traits and Dispatch
//!
//! - [`classes`]: structs with private state, constructors, `Clone`/`Drop`
//!   and composition
//! - [`inheritance`]: shared behaviour through traits, default methods and
//!   explicit delegation instead of multiple inheritance
//! - [`polymorphism`]: driver for the [`crate::shapes`] lesson

pub mod classes;
pub mod inheritance;
pub mod polymorphism;

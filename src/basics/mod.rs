//! # Language Basics
//!
//! - [`variables`]: scalar types, strings, constants and type inference
//! - [`loops`]: `for`, `while`, `loop`, ranges, `break`/`continue`
//! - [`functions`]: parameters, defaults via `Option`, trait-based overloading,
//!   `&mut` parameters, recursion and closures

pub mod functions;
pub mod loops;
pub mod variables;

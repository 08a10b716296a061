//! # Standard Collections and Algorithms
//!
//! - [`containers`]: sequences, ordered and hashed maps/sets, stacks, queues
//!   and heaps
//! - [`algorithms`]: searching, transforming, sorting, set algebra, numeric
//!   folds and permutations over slices and iterators

pub mod algorithms;
pub mod containers;

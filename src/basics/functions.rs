//! Functions: parameters and returns, optional arguments, overloading through
//! traits, mutable borrows, recursion and closures.
//!
//! Run with: cargo run --bin basics_functions

use std::io::{self, Write};

use crate::console::{banner, section, spaced};

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn message_line(message: &str) -> String {
    format!("Message: {message}")
}

/// Area of a rectangle; a missing width defaults to `1.0`.
pub fn calculate_area(length: f64, width: Option<f64>) -> f64 {
    length * width.unwrap_or(1.0)
}

// =============================================================================
// Overloading: one name, several argument types
// =============================================================================

pub trait Multiply<Rhs = Self> {
    type Output;

    fn multiply(self, rhs: Rhs) -> Self::Output;
}

impl Multiply for i32 {
    type Output = i32;

    fn multiply(self, rhs: i32) -> i32 {
        self * rhs
    }
}

impl Multiply for f64 {
    type Output = f64;

    fn multiply(self, rhs: f64) -> f64 {
        self * rhs
    }
}

pub fn multiply<T: Multiply>(a: T, b: T) -> T::Output {
    a.multiply(b)
}

/// Three-argument variant. Rust has no arity overloading, so it gets its own name.
pub fn multiply3(a: i32, b: i32, c: i32) -> i32 {
    a * b * c
}

// =============================================================================
// Mutable borrows and recursion
// =============================================================================

pub fn swap_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

pub fn double_all(values: &mut [i32]) {
    for value in values.iter_mut() {
        *value *= 2;
    }
}

/// `n!`, or `None` once the result no longer fits in a `u64`.
pub fn factorial(n: u32) -> Option<u64> {
    if n <= 1 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(u64::from(n))
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Functions")?;

    section(out, 1, "Basic function call")?;
    writeln!(out, "  add(5, 3) = {}", add(5, 3))?;
    writeln!(out)?;

    section(out, 2, "Function with a string parameter")?;
    writeln!(out, "  {}", message_line("Hello from function!"))?;
    writeln!(out)?;

    section(out, 3, "Optional parameter")?;
    writeln!(out, "  calculate_area(5.0, Some(3.0)) = {}", calculate_area(5.0, Some(3.0)))?;
    writeln!(out, "  calculate_area(5.0, None) = {}", calculate_area(5.0, None))?;
    writeln!(out)?;

    section(out, 4, "Overloading through a trait")?;
    writeln!(out, "  multiply(4, 5) = {}", multiply(4, 5))?;
    writeln!(out, "  multiply(4.5, 2.5) = {}", multiply(4.5, 2.5))?;
    writeln!(out, "  multiply3(2, 3, 4) = {}", multiply3(2, 3, 4))?;
    writeln!(out)?;

    section(out, 5, "Passing &mut")?;
    let (mut x, mut y) = (10, 20);
    writeln!(out, "  Before swap: x = {x}, y = {y}")?;
    swap_values(&mut x, &mut y);
    writeln!(out, "  After swap: x = {x}, y = {y}")?;
    writeln!(out)?;

    section(out, 6, "Passing a mutable slice")?;
    let mut numbers = vec![1, 2, 3, 4, 5];
    writeln!(out, "  Original vector: {}", spaced(&numbers))?;
    double_all(&mut numbers);
    writeln!(out, "  Modified vector: {}", spaced(&numbers))?;
    writeln!(out)?;

    section(out, 7, "Recursive function (factorial)")?;
    let n = 5;
    match factorial(n) {
        Some(value) => writeln!(out, "  factorial({n}) = {value}")?,
        None => writeln!(out, "  factorial({n}) overflows u64")?,
    }
    writeln!(out, "  factorial(25) = {:?}", factorial(25))?;
    writeln!(out)?;

    section(out, 8, "Closures")?;
    let square = |x: i32| x * x;
    writeln!(out, "  square(5) = {}", square(5))?;

    let multiplier = 3;
    let multiply_by = move |x: i32| x * multiplier;
    writeln!(out, "  multiply_by(4) = {}", multiply_by(4))?;

    let mut sum = 0;
    let mut add_to_sum = |x: i32| sum += x;
    add_to_sum(10);
    add_to_sum(20);
    writeln!(out, "  sum after adding 10 and 20 = {sum}")?;
    writeln!(out)?;

    banner(out, "End of Functions Example")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_width() {
        assert_eq!(calculate_area(5.0, Some(3.0)), 15.0);
        assert_eq!(calculate_area(5.0, None), 5.0);
    }

    #[test]
    fn trait_overloads() {
        assert_eq!(multiply(4, 5), 20);
        assert_eq!(multiply(4.5, 2.5), 11.25);
        assert_eq!(multiply3(2, 3, 4), 24);
    }

    #[test]
    fn swap_and_double() {
        let (mut a, mut b) = ("left", "right");
        swap_values(&mut a, &mut b);
        assert_eq!((a, b), ("right", "left"));

        let mut values = [1, 2, 3];
        double_all(&mut values);
        assert_eq!(values, [2, 4, 6]);
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn run_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("add(5, 3) = 8"));
        assert!(text.contains("After swap: x = 20, y = 10"));
        assert!(text.contains("Modified vector: 2 4 6 8 10"));
        assert!(text.contains("factorial(5) = 120"));
        assert!(text.contains("factorial(25) = None"));
        assert!(text.contains("sum after adding 10 and 20 = 30"));
    }
}

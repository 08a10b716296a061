//! Variables and data types.
//!
//! Run with: cargo run --bin basics_variables

use std::io::{self, Write};

use crate::console::{banner, section};

pub const MAX_STUDENTS: u32 = 100;
pub const GRAVITY: f64 = 9.81;

/// Name of the type the compiler inferred for `value`.
pub fn type_name_of<T: ?Sized>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Variables and Data Types")?;

    section(out, 1, "Integer types")?;
    let age: i32 = 25;
    let small_number: i16 = 100;
    let big_number: i64 = 1_000_000;
    let huge_number: i128 = 1_000_000_000;
    let count: usize = 3;
    writeln!(out, "  i32 age = {age}")?;
    writeln!(out, "  i16 small_number = {small_number}")?;
    writeln!(out, "  i64 big_number = {big_number}")?;
    writeln!(out, "  i128 huge_number = {huge_number}")?;
    writeln!(out, "  usize count = {count}")?;
    writeln!(out, "  u8 range = {}..={}", u8::MIN, u8::MAX)?;
    writeln!(out)?;

    section(out, 2, "Floating point types")?;
    let temperature: f32 = 36.6;
    let price: f64 = 19.99;
    writeln!(out, "  f32 temperature = {temperature}")?;
    writeln!(out, "  f64 price = {price}")?;
    writeln!(out, "  f64 PI constant = {}", std::f64::consts::PI)?;
    writeln!(out)?;

    section(out, 3, "Character types")?;
    let letter = 'A';
    let newline = '\n';
    let crab = '🦀';
    writeln!(out, "  char letter = '{letter}'")?;
    writeln!(out, "  char newline = {newline:?} (escape sequence)")?;
    writeln!(out, "  char crab = '{crab}' ({} bytes in UTF-8)", crab.len_utf8())?;
    writeln!(out)?;

    section(out, 4, "Boolean type")?;
    let is_student = true;
    let is_working = false;
    writeln!(out, "  bool is_student = {is_student}")?;
    writeln!(out, "  bool is_working = {is_working}")?;
    writeln!(out)?;

    section(out, 5, "Strings")?;
    let name = String::from("John Doe");
    let literal: &str = "borrowed slice";
    writeln!(out, "  String name = {name:?}")?;
    writeln!(out, "  String greeting = {:?}", greeting(&name))?;
    writeln!(out, "  &str literal = {literal:?}")?;
    writeln!(out)?;

    section(out, 6, "Constants")?;
    writeln!(out, "  const MAX_STUDENTS: u32 = {MAX_STUDENTS}")?;
    writeln!(out, "  const GRAVITY: f64 = {GRAVITY}")?;
    writeln!(out)?;

    section(out, 7, "Type inference")?;
    let inferred_int = 42;
    let inferred_float = 2.5;
    let inferred_str = "Hello";
    writeln!(out, "  let inferred_int = {inferred_int} (inferred as {})", type_name_of(&inferred_int))?;
    writeln!(out, "  let inferred_float = {inferred_float} (inferred as {})", type_name_of(&inferred_float))?;
    writeln!(out, "  let inferred_str = {inferred_str:?} (inferred as {})", type_name_of(&inferred_str))?;
    writeln!(out)?;

    section(out, 8, "Shadowing and mutability")?;
    let spaces = "   ";
    let spaces = spaces.len();
    let mut counter = 0;
    counter += 1;
    writeln!(out, "  shadowed spaces = {spaces}")?;
    writeln!(out, "  mutable counter = {counter}")?;
    writeln!(out)?;

    banner(out, "End of Variables Example")
}

//! Loops: `for` over ranges and collections, `while`, `loop` with `break`.
//!
//! Run with: cargo run --bin basics_loops

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use crate::console::{banner, section};

const EVEN_STEP: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

/// Values of `start..end` taking every `step`-th element.
pub fn stepped(start: u32, end: u32, step: NonZeroUsize) -> Vec<u32> {
    (start..end).step_by(step.get()).collect()
}

/// Counts down from `from` to 1, but always yields at least one value,
/// the way a do-while loop would.
pub fn countdown(from: u32) -> Vec<u32> {
    let mut values = Vec::new();
    let mut n = from;
    loop {
        values.push(n);
        if n <= 1 {
            break;
        }
        n -= 1;
    }
    values
}

/// `(i, j, i * j)` for every pair in `1..=n`.
pub fn multiplication_table(n: u32) -> Vec<(u32, u32, u32)> {
    let mut rows = Vec::new();
    for i in 1..=n {
        for j in 1..=n {
            rows.push((i, j, i * j));
        }
    }
    rows
}

/// Walk `range`, skipping `skip` and stopping before `stop`.
pub fn skip_then_stop(range: RangeInclusive<i32>, skip: i32, stop: i32) -> Vec<i32> {
    let mut seen = Vec::new();
    for i in range {
        if i == skip {
            continue;
        }
        if i == stop {
            break;
        }
        seen.push(i);
    }
    seen
}

/// Two counters moving towards each other: `i` up from 0, `j` down from `start`.
pub fn converging_pairs(start: i32, steps: usize) -> Vec<(i32, i32)> {
    (0..).zip((0..=start).rev()).take(steps).collect()
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Loops")?;

    section(out, 1, "Range for loop")?;
    for i in 1..=5 {
        writeln!(out, "  Iteration {i}")?;
    }
    writeln!(out)?;

    section(out, 2, "For loop with step 2")?;
    for n in stepped(0, 10, EVEN_STEP) {
        writeln!(out, "  Even number: {n}")?;
    }
    writeln!(out)?;

    section(out, 3, "While loop")?;
    let mut count = 1;
    while count <= 3 {
        writeln!(out, "  Count: {count}")?;
        count += 1;
    }
    writeln!(out)?;

    section(out, 4, "Loop that runs at least once")?;
    for n in countdown(5) {
        writeln!(out, "  Number: {n}")?;
    }
    writeln!(out)?;

    section(out, 5, "Nested loops (multiplication table)")?;
    for (i, j, product) in multiplication_table(3) {
        writeln!(out, "  {i} x {j} = {product}")?;
    }
    writeln!(out)?;

    section(out, 6, "For loop over an array")?;
    let numbers = [10, 20, 30, 40, 50];
    for num in numbers {
        writeln!(out, "  Array element: {num}")?;
    }
    writeln!(out)?;

    section(out, 7, "For loop over a vector")?;
    let fruits = vec!["apple", "banana", "orange", "grape"];
    for fruit in &fruits {
        writeln!(out, "  Fruit: {fruit}")?;
    }
    writeln!(out)?;

    section(out, 8, "Loop control (continue and break)")?;
    writeln!(out, "   Numbers 1-10, skip 5, stop at 8:")?;
    for n in skip_then_stop(1..=10, 5, 8) {
        writeln!(out, "  {n}")?;
    }
    writeln!(out)?;

    section(out, 9, "Loop with a break condition")?;
    let mut counter = 0;
    let last = loop {
        counter += 1;
        writeln!(out, "  Counter: {counter}")?;
        if counter >= 3 {
            break counter;
        }
    };
    writeln!(out, "  loop evaluated to {last}")?;
    writeln!(out)?;

    section(out, 10, "Two counters in one loop")?;
    for (i, j) in converging_pairs(10, 5) {
        writeln!(out, "  i = {i}, j = {j}")?;
    }
    writeln!(out)?;

    section(out, 11, "Enumerate")?;
    for (index, fruit) in fruits.iter().enumerate() {
        writeln!(out, "  {index}: {fruit}")?;
    }
    writeln!(out)?;

    banner(out, "End of Loops Example")
}

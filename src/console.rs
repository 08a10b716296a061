//! Shared console formatting for the lesson drivers.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// `=== Title ===` banner that opens and closes every lesson.
pub fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("=== {title} ===").bold())?;
    writeln!(out)
}

/// Numbered section heading, e.g. `3. While loop:`.
pub fn section(out: &mut dyn Write, number: usize, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("{number}. {title}:").cyan())
}

/// Upper-case heading used by the container and algorithm lessons.
pub fn topic(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("=== {} ===", title.to_uppercase()).yellow())
}

/// Space-separated rendering of a sequence: `1 2 3`.
pub fn spaced<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Yes`/`No` rendering for booleans.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

//! Entry-point listing of the lesson binaries.

use std::io::{self, Write};

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonInfo {
    pub binary: &'static str,
    pub description: &'static str,
}

pub const LESSONS: &[LessonInfo] = &[
    LessonInfo { binary: "basics_variables", description: "Variable examples" },
    LessonInfo { binary: "basics_loops", description: "Loop examples" },
    LessonInfo { binary: "basics_functions", description: "Function examples" },
    LessonInfo { binary: "oop_classes", description: "Struct examples" },
    LessonInfo { binary: "oop_inheritance", description: "Trait and composition examples" },
    LessonInfo { binary: "oop_polymorphism", description: "Dynamic dispatch examples" },
    LessonInfo { binary: "stl_containers", description: "Standard container examples" },
    LessonInfo { binary: "stl_algorithms", description: "Standard algorithm examples" },
];

pub fn find(binary: &str) -> Option<&'static LessonInfo> {
    LESSONS.iter().find(|lesson| lesson.binary == binary)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let rule = "===========================================";
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", "    Welcome to the Rust Lessons!".bold())?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    writeln!(out, "This project contains:")?;
    writeln!(out, "1. Basic concepts (variables, loops, functions)")?;
    writeln!(out, "2. Structs, traits and dynamic dispatch")?;
    writeln!(out, "3. Standard containers and algorithms")?;
    writeln!(out)?;

    writeln!(out, "To run a specific lesson, use:")?;
    let width = LESSONS.iter().map(|l| l.binary.len()).max().unwrap_or(0);
    for lesson in LESSONS {
        writeln!(
            out,
            "  cargo run --bin {:<width$}  - {}",
            lesson.binary.green(),
            lesson.description
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Happy learning!")
}

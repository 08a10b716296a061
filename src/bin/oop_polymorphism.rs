use std::io::{self, Write};

use lessons::oop::polymorphism;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    polymorphism::run(&mut out)?;
    out.flush()?;
    Ok(())
}

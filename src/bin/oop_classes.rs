use std::io::{self, Write};

use lessons::oop::classes;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    classes::run(&mut out)?;
    out.flush()?;
    Ok(())
}

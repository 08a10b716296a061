use std::io::{self, Write};

use lessons::oop::inheritance;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    inheritance::run(&mut out)?;
    out.flush()?;
    Ok(())
}

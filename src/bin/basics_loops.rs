use std::io::{self, Write};

use lessons::basics::loops;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    loops::run(&mut out)?;
    out.flush()?;
    Ok(())
}

use std::io::{self, Write};

use lessons::launcher;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    launcher::run(&mut out)?;
    out.flush()?;
    Ok(())
}

use std::io::{self, Write};

use lessons::collections::containers;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    containers::run(&mut out)?;
    out.flush()?;
    Ok(())
}

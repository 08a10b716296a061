use std::io::{self, Write};

use lessons::basics::functions;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    functions::run(&mut out)?;
    out.flush()?;
    Ok(())
}

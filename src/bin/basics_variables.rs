use std::io::{self, Write};

use lessons::basics::variables;
use lessons::{telemetry, LessonError};

fn main() -> Result<(), LessonError> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    variables::run(&mut out)?;
    out.flush()?;
    Ok(())
}

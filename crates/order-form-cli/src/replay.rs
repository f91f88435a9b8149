// File: src/replay.rs
// Purpose: Drive the form from a JSON-lines command script

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use order_form::{FormCommand, OrderFormValidator, SubmitOutcome};
use tracing::{info, warn};

/// Applies each command line in order and writes the resulting snapshot as
/// one JSON line. Blank lines are skipped. Rejected field changes are logged
/// and do not stop the replay.
pub fn replay<R: BufRead, W: Write>(
    form: &mut OrderFormValidator,
    input: R,
    mut output: W,
) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let command: FormCommand = serde_json::from_str(&line)
            .with_context(|| format!("Invalid command on line {}", line_no))?;

        match command {
            FormCommand::Field(event) => {
                if let Err(e) = form.apply_event(&event) {
                    warn!("Line {}: {}", line_no, e);
                }
            }
            FormCommand::Submit => match form.on_submit() {
                SubmitOutcome::Confirmed(message) => {
                    info!("Line {}: {}", line_no, message.lines().collect::<Vec<_>>().join(" / "));
                }
                SubmitOutcome::Rejected(errors) => {
                    for (field, message) in errors.failing() {
                        info!("Line {}: {}: {}", line_no, field, message);
                    }
                }
            },
            FormCommand::Reset => form.reset(),
        }

        serde_json::to_writer(&mut output, &form.snapshot())?;
        writeln!(output)?;
    }

    output.flush()?;
    Ok(())
}

//! Export command for writing the history as JSON Lines.

use std::io::{BufWriter, ErrorKind, Write, stdout};

use anyhow::{Context, Result};

use slt_core::SleepLog;
use slt_db::Database;

/// Runs the export command.
///
/// Outputs one JSON object per recorded night to stdout, insertion order.
pub fn run(db: &Database) -> Result<()> {
    let logs = db.list_logs()?;

    let stdout = stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_logs(&mut writer, &logs)
}

fn write_logs<W: Write>(writer: &mut W, logs: &[SleepLog]) -> Result<()> {
    for log in logs {
        let line = serde_json::to_string(log).context("failed to serialize log")?;
        // A closed pipe (e.g., when piped to `head`) ends the stream, not
        // the command; any other write error surfaces
        match writeln!(writer, "{line}") {
            Err(err) if err.kind() == ErrorKind::BrokenPipe => return Ok(()),
            result => result.context("failed to write export stream")?,
        }
    }
    match writer.flush() {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to flush export stream"),
    }
}

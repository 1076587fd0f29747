//! Clear command for deleting the recorded history.

use std::io::Write;

use anyhow::Result;

use slt_db::Database;

/// Runs the clear command.
pub fn run(db: &Database, force: bool) -> Result<()> {
    let stdout = std::io::stdout();
    clear(&mut stdout.lock(), db, force)
}

/// Deletes every record when forced; otherwise reports what would happen.
fn clear<W: Write>(writer: &mut W, db: &Database, force: bool) -> Result<()> {
    let total = db.count_logs()?;
    if total == 0 {
        writeln!(writer, "Nothing to clear.")?;
        return Ok(());
    }

    let night_word = if total == 1 { "night" } else { "nights" };
    if !force {
        writeln!(
            writer,
            "This would delete {total} {night_word}. Re-run with --force to confirm."
        )?;
        return Ok(());
    }

    let deleted = db.delete_all_logs()?;
    tracing::debug!(deleted, "cleared sleep history");
    writeln!(writer, "Deleted {deleted} {night_word}.")?;
    Ok(())
}

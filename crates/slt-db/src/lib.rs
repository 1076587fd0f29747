//! Storage layer for the sleep tracker.
//!
//! Persists sleep records using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but
//! not `Sync`. A `Database` instance can be moved between threads but cannot
//! be shared across threads without external synchronization.
//!
//! # Schema
//!
//! Dates are stored as TEXT in `YYYY-MM-DD` form and times as `HH:MM:SS`,
//! the canonical `chrono` renderings, so lexicographic ordering matches
//! chronological ordering and values stay readable in the database.
//!
//! `duration_hours` is stored as a REAL and handed back bit-for-bit; the
//! analytics engine treats the stored value as authoritative and never
//! recomputes it. `factors` is a JSON array string.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, params};
use thiserror::Error;

use slt_core::{LogId, Mood, Quality, SleepLog};

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored column failed to decode back into its typed form.
    #[error("invalid stored {field} for log {log_id}: {value}")]
    Decode {
        log_id: String,
        field: &'static str,
        value: String,
    },
    /// Factor tags failed to encode as JSON before storage.
    #[error("factors for log {log_id} did not encode as JSON: {source}")]
    FactorsJson {
        log_id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// One `sleep_logs` row before typed decoding.
struct RawLog {
    id: String,
    date: String,
    bedtime: String,
    waketime: String,
    duration_hours: f64,
    quality: i64,
    mood: String,
    factors: String,
    notes: String,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            -- date: 'YYYY-MM-DD'; bedtime/waketime: 'HH:MM:SS'
            -- duration_hours: derived once at record creation, never recomputed
            -- factors: JSON array of tag strings
            CREATE TABLE IF NOT EXISTS sleep_logs (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                bedtime TEXT NOT NULL,
                waketime TEXT NOT NULL,
                duration_hours REAL NOT NULL,
                quality INTEGER NOT NULL,
                mood TEXT NOT NULL,
                factors TEXT NOT NULL DEFAULT '[]',
                notes TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sleep_logs_date ON sleep_logs(date);
            ",
        )?;
        Ok(())
    }

    /// Inserts a single record, erroring on a duplicate ID.
    pub fn insert_log(&self, log: &SleepLog) -> Result<(), DbError> {
        let factors = encode_factors(log)?;
        self.conn.execute(
            "
            INSERT INTO sleep_logs
            (id, date, bedtime, waketime, duration_hours, quality, mood, factors, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
            params![
                log.id.as_str(),
                log.date.to_string(),
                log.bedtime.to_string(),
                log.waketime.to_string(),
                log.duration_hours,
                i64::from(log.quality),
                log.mood.label(),
                factors,
                log.notes,
                now_timestamp(),
            ],
        )?;
        tracing::debug!(id = %log.id, date = %log.date, "inserted sleep log");
        Ok(())
    }

    /// Inserts a batch of records, ignoring duplicates by ID.
    ///
    /// Returns the number actually inserted.
    pub fn insert_logs(&mut self, logs: &[SleepLog]) -> Result<usize, DbError> {
        if logs.is_empty() {
            return Ok(0);
        }
        let created_at = now_timestamp();
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "
                INSERT OR IGNORE INTO sleep_logs
                (id, date, bedtime, waketime, duration_hours, quality, mood, factors, notes, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
            )?;
            for log in logs {
                let factors = encode_factors(log)?;
                inserted += stmt.execute(params![
                    log.id.as_str(),
                    log.date.to_string(),
                    log.bedtime.to_string(),
                    log.waketime.to_string(),
                    log.duration_hours,
                    i64::from(log.quality),
                    log.mood.label(),
                    factors,
                    log.notes,
                    created_at,
                ])?;
            }
        }
        tx.commit()?;
        tracing::debug!(total = logs.len(), inserted, "batch insert finished");
        Ok(inserted)
    }

    /// Lists all records in insertion order.
    pub fn list_logs(&self) -> Result<Vec<SleepLog>, DbError> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS} FROM sleep_logs ORDER BY rowid ASC"
        ))?;
        let rows = stmt.query_map([], raw_log_row)?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(decode_log(row?)?);
        }
        Ok(logs)
    }

    /// Lists the most recent records, newest date first.
    ///
    /// Records sharing a date come back latest-inserted first.
    pub fn list_recent_logs(&self, limit: usize) -> Result<Vec<SleepLog>, DbError> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS} FROM sleep_logs ORDER BY date DESC, rowid DESC LIMIT ?"
        ))?;
        let rows = stmt.query_map([i64::try_from(limit).unwrap_or(i64::MAX)], raw_log_row)?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(decode_log(row?)?);
        }
        Ok(logs)
    }

    /// Number of stored records.
    pub fn count_logs(&self) -> Result<u64, DbError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM sleep_logs", [], |row| {
                row.get::<_, u64>(0)
            })?;
        Ok(count)
    }

    /// Deletes every record. Returns the number removed.
    pub fn delete_all_logs(&self) -> Result<usize, DbError> {
        let deleted = self.conn.execute("DELETE FROM sleep_logs", [])?;
        tracing::debug!(deleted, "cleared sleep logs");
        Ok(deleted)
    }
}

const SELECT_COLUMNS: &str = "SELECT id, date, bedtime, waketime, duration_hours, \
                              quality, mood, factors, notes";

fn raw_log_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawLog> {
    Ok(RawLog {
        id: row.get(0)?,
        date: row.get(1)?,
        bedtime: row.get(2)?,
        waketime: row.get(3)?,
        duration_hours: row.get(4)?,
        quality: row.get(5)?,
        mood: row.get(6)?,
        factors: row.get(7)?,
        notes: row.get(8)?,
    })
}

/// Decodes a raw row, reporting the offending log ID on failure.
fn decode_log(raw: RawLog) -> Result<SleepLog, DbError> {
    let decode_err = |field: &'static str, value: &str| DbError::Decode {
        log_id: raw.id.clone(),
        field,
        value: value.to_string(),
    };

    let id = LogId::new(raw.id.as_str()).map_err(|_| decode_err("id", &raw.id))?;
    let date = raw
        .date
        .parse()
        .map_err(|_| decode_err("date", &raw.date))?;
    let bedtime = raw
        .bedtime
        .parse()
        .map_err(|_| decode_err("bedtime", &raw.bedtime))?;
    let waketime = raw
        .waketime
        .parse()
        .map_err(|_| decode_err("waketime", &raw.waketime))?;
    let quality =
        Quality::new(raw.quality).map_err(|_| decode_err("quality", &raw.quality.to_string()))?;
    let factors: Vec<String> =
        serde_json::from_str(&raw.factors).map_err(|_| decode_err("factors", &raw.factors))?;

    Ok(SleepLog {
        id,
        date,
        bedtime,
        waketime,
        duration_hours: raw.duration_hours,
        quality,
        mood: Mood::from(raw.mood.as_str()),
        factors,
        notes: raw.notes,
    })
}

fn encode_factors(log: &SleepLog) -> Result<String, DbError> {
    serde_json::to_string(&log.factors).map_err(|source| DbError::FactorsJson {
        log_id: log.id.to_string(),
        source,
    })
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::Result;
use crate::models::ResumeRecord;

/// Keyed store for extracted records. The hand-off contract is whole-record
/// replacement: a save under an existing key overwrites the previous record.
pub struct Storage {
    conn: Connection,
}

#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub key: String,
    pub record: ResumeRecord,
    pub saved_at: DateTime<Utc>,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let storage = Self { conn };
        storage.init_db()?;
        Ok(storage)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self { conn };
        storage.init_db()?;
        Ok(storage)
    }

    fn init_db(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                record_json TEXT NOT NULL,
                saved_at TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    pub fn save_record(&self, key: &str, record: &ResumeRecord) -> Result<()> {
        let record_json = serde_json::to_string(record)?;

        self.conn.execute(
            r#"
            INSERT INTO records (key, record_json, saved_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                record_json = excluded.record_json,
                saved_at = excluded.saved_at
            "#,
            params![key, record_json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    pub fn get_record(&self, key: &str) -> Result<Option<StoredRecord>> {
        let result = self.conn.query_row(
            "SELECT record_json, saved_at FROM records WHERE key = ?1",
            params![key],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        );

        match result {
            Ok((record_json, saved_at_str)) => {
                let record = serde_json::from_str(&record_json)?;
                let saved_at = DateTime::parse_from_rfc3339(&saved_at_str)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now());

                Ok(Some(StoredRecord {
                    key: key.to_string(),
                    record,
                    saved_at,
                }))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM records ORDER BY saved_at DESC, key")?;

        let keys = stmt.query_map([], |row| row.get(0))?;
        keys.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
    }
}

//! Append-only SQLite set of `(day_text, menu)` pairs.

use std::path::Path;

use anyhow::Context as _;
use rusqlite::{Connection, params};

use crate::formats::{MenuEntry, StoredEntry};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS lilac_menu (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    day_text TEXT NOT NULL,
    menu TEXT NOT NULL,
    seen_at TEXT NOT NULL,
    UNIQUE(day_text, menu)
);";

pub struct MenuStore {
    db: Connection,
}

impl MenuStore {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create database dir: {}", parent.display()))?;
        }
        let db = Connection::open(path)
            .with_context(|| format!("open database: {}", path.display()))?;
        Self::init(db)
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        Self::init(Connection::open_in_memory().context("open in-memory database")?)
    }

    fn init(db: Connection) -> anyhow::Result<Self> {
        db.execute_batch(SCHEMA).context("create lilac_menu table")?;
        Ok(Self { db })
    }

    /// Stores pairs not seen before and returns how many were new.
    pub fn insert_new(&mut self, entries: &[MenuEntry], seen_at: &str) -> anyhow::Result<usize> {
        if entries.is_empty() {
            return Ok(0);
        }

        let tx = self.db.transaction().context("begin insert")?;
        let mut added = 0_usize;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT OR IGNORE INTO lilac_menu (day_text, menu, seen_at) VALUES (?1, ?2, ?3)",
                )
                .context("prepare insert")?;
            for entry in entries {
                let changed = stmt
                    .execute(params![entry.day_text, entry.menu, seen_at])
                    .with_context(|| format!("insert {} / {}", entry.day_text, entry.menu))?;
                added += changed;
            }
        }
        tx.commit().context("commit insert")?;

        tracing::debug!(total = entries.len(), added, "stored menu entries");
        Ok(added)
    }

    /// Every stored pair in insertion order.
    pub fn entries(&self) -> anyhow::Result<Vec<StoredEntry>> {
        let mut stmt = self
            .db
            .prepare("SELECT day_text, menu, seen_at FROM lilac_menu ORDER BY id")
            .context("prepare select")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoredEntry {
                    entry: MenuEntry::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?),
                    seen_at: row.get(2)?,
                })
            })
            .context("query lilac_menu")?
            .collect::<Result<Vec<_>, _>>()
            .context("read lilac_menu row")?;
        Ok(rows)
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    Connection::open(db_path).with_context(|| format!("failed to open db: {}", db_path.display()))
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS column_visibility (
            storage_key TEXT NOT NULL,
            column_key  TEXT NOT NULL,
            visible     INTEGER NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (storage_key, column_key)
        );
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}

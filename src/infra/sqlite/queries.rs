use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::infra::sqlite::schema::open_connection;

pub fn load_column_visibility(db_path: &Path, storage_key: &str) -> Result<BTreeMap<String, bool>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT column_key, visible
             FROM column_visibility
             WHERE storage_key = ?1
             ORDER BY column_key ASC",
        )
        .context("failed to prepare column visibility query")?;

    let visibility_iter = stmt
        .query_map([storage_key], |row| {
            let column_key: String = row.get(0)?;
            let visible: i64 = row.get(1)?;
            Ok((column_key, visible != 0))
        })
        .context("failed to query column visibility")?;

    let mut visibility = BTreeMap::new();
    for item in visibility_iter {
        let (column_key, visible) = item.context("failed to read column visibility row")?;
        visibility.insert(column_key, visible);
    }

    Ok(visibility)
}

pub fn upsert_column_visibility(
    db_path: &Path,
    storage_key: &str,
    visibility: &BTreeMap<String, bool>,
) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start column visibility transaction")?;

    tx.execute(
        "DELETE FROM column_visibility WHERE storage_key = ?1",
        [storage_key],
    )
    .context("failed to clear existing column visibility")?;

    let mut insert_stmt = tx
        .prepare(
            "INSERT INTO column_visibility(storage_key, column_key, visible)
             VALUES (?1, ?2, ?3)",
        )
        .context("failed to prepare column visibility insert")?;

    for (column_key, visible) in visibility {
        let value = i64::from(*visible);
        insert_stmt
            .execute(params![storage_key, column_key, value])
            .with_context(|| format!("failed to insert visibility for `{column_key}`"))?;
    }
    drop(insert_stmt);

    tx.commit()
        .context("failed to commit column visibility transaction")?;
    Ok(())
}

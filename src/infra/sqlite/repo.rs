use std::path::PathBuf;

use crate::domain::entities::visibility::ColumnVisibility;
use crate::infra::sqlite::queries::{load_column_visibility, upsert_column_visibility};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::visibility_store::{StoreError, VisibilityStore};

/// Column visibility persisted in the desktop preferences database.
pub struct SqliteVisibilityStore {
    pub db_path: PathBuf,
}

impl SqliteVisibilityStore {
    pub fn open(db_path: PathBuf) -> Result<Self, StoreError> {
        init_db(&db_path).map_err(|err| StoreError::Message(format!("{err:#}")))?;
        Ok(Self { db_path })
    }
}

impl VisibilityStore for SqliteVisibilityStore {
    fn load(&self, storage_key: &str) -> Result<ColumnVisibility, StoreError> {
        load_column_visibility(&self.db_path, storage_key)
            .map(ColumnVisibility::from_entries)
            .map_err(|err| StoreError::Message(format!("{err:#}")))
    }

    fn save(&self, storage_key: &str, visibility: &ColumnVisibility) -> Result<(), StoreError> {
        upsert_column_visibility(&self.db_path, storage_key, visibility.entries())
            .map_err(|err| StoreError::Message(format!("{err:#}")))
    }
}

use gloo_storage::{LocalStorage, Storage};

use crate::domain::entities::visibility::ColumnVisibility;
use crate::usecase::ports::visibility_store::{StoreError, VisibilityStore};

const KEY_PREFIX: &str = "edu-admin.columns.";

/// Column visibility in the browser's `localStorage`, one JSON object per table.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageVisibilityStore;

impl LocalStorageVisibilityStore {
    fn key(storage_key: &str) -> String {
        format!("{KEY_PREFIX}{storage_key}")
    }
}

impl VisibilityStore for LocalStorageVisibilityStore {
    fn load(&self, storage_key: &str) -> Result<ColumnVisibility, StoreError> {
        match LocalStorage::get::<ColumnVisibility>(Self::key(storage_key)) {
            Ok(visibility) => Ok(visibility),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(ColumnVisibility::new()),
            Err(err) => Err(StoreError::Message(err.to_string())),
        }
    }

    fn save(&self, storage_key: &str, visibility: &ColumnVisibility) -> Result<(), StoreError> {
        LocalStorage::set(Self::key(storage_key), visibility)
            .map_err(|err| StoreError::Message(err.to_string()))
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::visibility::ColumnVisibility;
use crate::usecase::ports::visibility_store::{StoreError, VisibilityStore};

/// Process-lifetime store, used when no durable store can be opened.
#[derive(Debug, Default)]
pub struct MemoryVisibilityStore {
    tables: Mutex<HashMap<String, ColumnVisibility>>,
}

impl MemoryVisibilityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisibilityStore for MemoryVisibilityStore {
    fn load(&self, storage_key: &str) -> Result<ColumnVisibility, StoreError> {
        let tables = self
            .tables
            .lock()
            .map_err(|_| StoreError::Message("visibility store lock poisoned".to_string()))?;
        Ok(tables.get(storage_key).cloned().unwrap_or_default())
    }

    fn save(&self, storage_key: &str, visibility: &ColumnVisibility) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| StoreError::Message("visibility store lock poisoned".to_string()))?;
        tables.insert(storage_key.to_string(), visibility.clone());
        Ok(())
    }
}

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::visibility::ColumnVisibility;
use crate::usecase::ports::visibility_store::{StoreError, VisibilityStore};

/// Column visibility per table. Store failures never block the table:
/// they are logged and the in-memory value wins.
#[derive(Clone)]
pub struct VisibilityService {
    store: Arc<dyn VisibilityStore>,
}

impl VisibilityService {
    pub fn new(store: Arc<dyn VisibilityStore>) -> Self {
        Self { store }
    }

    pub fn load(&self, storage_key: &str) -> ColumnVisibility {
        match self.store.load(storage_key) {
            Ok(visibility) => visibility,
            Err(err) => {
                warn!(storage_key, error = %err, "failed to load column visibility");
                ColumnVisibility::new()
            }
        }
    }

    pub fn toggle(
        &self,
        storage_key: &str,
        current: &ColumnVisibility,
        column_key: &str,
        show: bool,
    ) -> ColumnVisibility {
        let next = current.toggled(column_key, show);
        self.persist(storage_key, &next);
        next
    }

    pub fn show_all<'a>(
        &self,
        storage_key: &str,
        current: &ColumnVisibility,
        column_keys: impl IntoIterator<Item = &'a str>,
    ) -> ColumnVisibility {
        let next = current.all_shown(column_keys);
        self.persist(storage_key, &next);
        next
    }

    pub fn try_save(&self, storage_key: &str, visibility: &ColumnVisibility) -> Result<(), StoreError> {
        self.store.save(storage_key, visibility)
    }

    fn persist(&self, storage_key: &str, visibility: &ColumnVisibility) {
        if let Err(err) = self.try_save(storage_key, visibility) {
            warn!(storage_key, error = %err, "failed to persist column visibility");
        }
    }
}

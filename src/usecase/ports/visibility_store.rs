use thiserror::Error;

use crate::domain::entities::visibility::ColumnVisibility;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Message(String),
}

/// Durable per-table column visibility, keyed by the table's storage key.
pub trait VisibilityStore: Send + Sync {
    fn load(&self, storage_key: &str) -> Result<ColumnVisibility, StoreError>;
    fn save(&self, storage_key: &str, visibility: &ColumnVisibility) -> Result<(), StoreError>;
}

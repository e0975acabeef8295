pub mod filter_sync;
pub mod history;
pub mod pagination;
pub mod query_sync;
pub mod sort_controller;
pub mod visibility_service;

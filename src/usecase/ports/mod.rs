pub mod navigator;
pub mod visibility_store;

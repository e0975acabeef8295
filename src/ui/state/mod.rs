pub mod app_state;
pub mod filter_hook;
pub mod visibility_hook;

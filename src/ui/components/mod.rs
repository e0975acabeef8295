pub mod cells;
pub mod data_table;
pub mod filters;
pub mod pagination;
pub mod toolbar;
pub mod view_options;

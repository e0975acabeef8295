pub mod columns;
pub mod view_model;

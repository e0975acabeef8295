pub mod envelope;
pub mod filter;
pub mod page;
pub mod records;
pub mod resource;
pub mod sort;
pub mod visibility;

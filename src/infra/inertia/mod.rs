pub mod client;
pub mod routes;

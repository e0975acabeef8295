#[cfg(not(target_arch = "wasm32"))]
pub mod desktop;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::timer::sleep;
#[cfg(target_arch = "wasm32")]
pub use web::timer::sleep;

//! HTTP request handlers.

pub mod owner_handler;
pub mod specialty_handler;
pub mod vet_handler;

pub use owner_handler::owner_routes;
pub use specialty_handler::specialty_routes;
pub use vet_handler::vet_routes;

//! Common types shared across the API surface.

mod response;

pub use response::Created;

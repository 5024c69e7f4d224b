//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub mod entities;
mod memory;
mod record_store;
mod sql;

pub use memory::MemoryStore;
pub use record_store::RecordStore;
pub use sql::SqlStore;

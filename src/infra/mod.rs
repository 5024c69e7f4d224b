//! Infrastructure layer: database access and record stores.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{MemoryStore, RecordStore, SqlStore};

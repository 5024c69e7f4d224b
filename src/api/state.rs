//! Application state for dependency injection.

use std::sync::Arc;

use crate::domain::{Owner, Specialty, Vet};
use crate::infra::{Database, RecordStore, SqlStore};
use crate::services::RecordService;

/// Shared application state containing one record service per kind.
#[derive(Clone)]
pub struct AppState {
    pub owners: RecordService<Owner>,
    pub vets: RecordService<Vet>,
    pub specialties: RecordService<Specialty>,
}

impl AppState {
    /// Create application state backed by the SQL store.
    pub fn from_database(database: &Database) -> Self {
        Self::from_store(Arc::new(SqlStore::new(database.get_connection())))
    }

    /// Create application state on top of any store that backs all
    /// three record kinds.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: RecordStore<Owner> + RecordStore<Vet> + RecordStore<Specialty> + 'static,
    {
        Self {
            owners: RecordService::new(store.clone() as Arc<dyn RecordStore<Owner>>),
            vets: RecordService::new(store.clone() as Arc<dyn RecordStore<Vet>>),
            specialties: RecordService::new(store as Arc<dyn RecordStore<Specialty>>),
        }
    }
}

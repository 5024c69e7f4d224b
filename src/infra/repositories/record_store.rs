//! Record store abstraction.

use async_trait::async_trait;

use crate::domain::{RecordId, RecordKind};
use crate::errors::AppResult;

/// Keyed storage for one record kind.
///
/// The service layer depends on this trait only: a SeaORM-backed store
/// serves production while an in-memory store backs tests, with identical
/// identifier discipline.
#[async_trait]
pub trait RecordStore<K: RecordKind>: Send + Sync {
    /// Insert a new record. The store assigns the identifier; any
    /// identifier already present on the entity is ignored.
    async fn insert(&self, entity: K::NewEntity) -> AppResult<K::Entity>;

    /// Full-record write against an existing identifier. Returns `None`
    /// when the identifier resolves to nothing; no record is created.
    async fn update(&self, entity: K::NewEntity) -> AppResult<Option<K::Entity>>;

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<K::Entity>>;

    /// Exact field-equality lookup; zero matches is not an error.
    async fn find_by(&self, filter: K::Filter) -> AppResult<Vec<K::Entity>>;

    /// Every record of the kind, in ascending identifier order.
    async fn find_all(&self) -> AppResult<Vec<K::Entity>>;

    /// Remove by identifier, reporting whether a record went away.
    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool>;
}

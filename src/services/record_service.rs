//! Generic record service.
//!
//! One implementation of the CRUD contract shared by every record kind,
//! instantiated per kind with the store injected behind a trait object.

use std::sync::Arc;

use crate::domain::{
    EntityMapper, Owner, OwnerDto, OwnerFilter, RecordId, RecordKind, Specialty, SpecialtyDto,
    SpecialtyFilter, Vet, VetDto, VetFilter,
};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::RecordStore;

/// CRUD facade for one record kind.
///
/// Identifier lookups that miss resolve to the kind's own not-found error,
/// which the HTTP boundary turns into a 404 with the kind named in the
/// message.
pub struct RecordService<K: RecordKind> {
    store: Arc<dyn RecordStore<K>>,
}

impl<K: RecordKind> Clone for RecordService<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K: RecordKind> RecordService<K> {
    pub fn new(store: Arc<dyn RecordStore<K>>) -> Self {
        Self { store }
    }

    /// Insert a new record; the store assigns its identifier.
    pub async fn create(&self, dto: K::Dto) -> AppResult<K::Dto> {
        let created = self.store.insert(K::Mapper::to_entity(dto)).await?;
        let dto = K::Mapper::to_dto(created);
        if let Some(id) = K::dto_id(&dto) {
            tracing::info!(kind = K::NAME, id, "record created");
        }
        Ok(dto)
    }

    /// Full-replacement write of an existing record.
    ///
    /// A dto with no identifier is rejected; an identifier that resolves to
    /// nothing yields the kind's not-found error, never a fresh record.
    pub async fn update(&self, dto: K::Dto) -> AppResult<K::Dto> {
        let id = K::dto_id(&dto)
            .ok_or_else(|| AppError::bad_request("update requires an identifier"))?;

        let updated = self
            .store
            .update(K::Mapper::to_entity(dto))
            .await?
            .ok_or_else(|| K::not_found(id))?;

        tracing::info!(kind = K::NAME, id, "record updated");
        Ok(K::Mapper::to_dto(updated))
    }

    /// Confirm existence, then remove. A missing identifier propagates
    /// not-found and deletes nothing; at most one record goes away.
    pub async fn delete(&self, id: RecordId) -> AppResult<()> {
        self.find_by_id(id).await?;

        let removed = self.store.delete_by_id(id).await?;
        if removed {
            tracing::info!(kind = K::NAME, id, "record deleted");
        }
        Ok(())
    }

    /// Look up one record; a miss is the kind's checked not-found outcome.
    pub async fn find_by_id(&self, id: RecordId) -> AppResult<K::Dto> {
        let entity = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| K::not_found(id))?;

        Ok(K::Mapper::to_dto(entity))
    }

    /// Exact field-equality lookup; zero matches is a normal outcome.
    pub async fn find_by(&self, filter: K::Filter) -> AppResult<Vec<K::Dto>> {
        let entities = self.store.find_by(filter).await?;
        tracing::debug!(kind = K::NAME, matches = entities.len(), "field lookup");
        Ok(K::Mapper::to_dto_list(entities))
    }

    /// Every record of the kind, in store order; never fails when empty.
    pub async fn find_all(&self) -> AppResult<Vec<K::Dto>> {
        let entities = self.store.find_all().await?;
        Ok(K::Mapper::to_dto_list(entities))
    }
}

impl RecordService<Owner> {
    pub async fn find_by_first_name(&self, first_name: &str) -> AppResult<Vec<OwnerDto>> {
        self.find_by(OwnerFilter::FirstName(first_name.to_string()))
            .await
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<OwnerDto>> {
        self.find_by(OwnerFilter::LastName(last_name.to_string()))
            .await
    }

    pub async fn find_by_city(&self, city: &str) -> AppResult<Vec<OwnerDto>> {
        self.find_by(OwnerFilter::City(city.to_string())).await
    }
}

impl RecordService<Vet> {
    pub async fn find_by_first_name(&self, first_name: &str) -> AppResult<Vec<VetDto>> {
        self.find_by(VetFilter::FirstName(first_name.to_string()))
            .await
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<VetDto>> {
        self.find_by(VetFilter::LastName(last_name.to_string()))
            .await
    }
}

impl RecordService<Specialty> {
    pub async fn find_by_name(&self, name: &str) -> AppResult<Vec<SpecialtyDto>> {
        self.find_by(SpecialtyFilter::Name(name.to_string())).await
    }
}

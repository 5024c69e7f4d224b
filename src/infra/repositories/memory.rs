//! In-memory record stores.
//!
//! Backs tests and local experiments with the same contract as the SeaORM
//! store. Identifiers are issued sequentially from 1, mirroring a fresh
//! database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Owner, OwnerFilter, RecordId, Specialty, SpecialtyFilter, Vet, VetFilter};
use crate::errors::AppResult;

use super::entities::{owner, specialty, vet};
use super::record_store::RecordStore;

struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn issue_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Keyed in-memory storage for all three record kinds.
#[derive(Default)]
pub struct MemoryStore {
    owners: RwLock<Table<owner::Model>>,
    vets: RwLock<Table<vet::Model>>,
    specialties: RwLock<Table<specialty::Model>>,
}

#[async_trait]
impl RecordStore<Owner> for MemoryStore {
    async fn insert(&self, mut entity: owner::ActiveModel) -> AppResult<owner::Model> {
        let mut table = self.owners.write().await;
        let model = owner::Model {
            id: table.issue_id(),
            first_name: entity.first_name.take().unwrap_or_default(),
            last_name: entity.last_name.take().unwrap_or_default(),
            address: entity.address.take().unwrap_or_default(),
            city: entity.city.take().unwrap_or_default(),
            telephone: entity.telephone.take().unwrap_or_default(),
        };
        table.rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, mut entity: owner::ActiveModel) -> AppResult<Option<owner::Model>> {
        let Some(id) = entity.id.take() else {
            return Ok(None);
        };
        let mut table = self.owners.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        let model = owner::Model {
            id,
            first_name: entity.first_name.take().unwrap_or_default(),
            last_name: entity.last_name.take().unwrap_or_default(),
            address: entity.address.take().unwrap_or_default(),
            city: entity.city.take().unwrap_or_default(),
            telephone: entity.telephone.take().unwrap_or_default(),
        };
        table.rows.insert(id, model.clone());
        Ok(Some(model))
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<owner::Model>> {
        Ok(self.owners.read().await.rows.get(&id).cloned())
    }

    async fn find_by(&self, filter: OwnerFilter) -> AppResult<Vec<owner::Model>> {
        let table = self.owners.read().await;
        Ok(table
            .rows
            .values()
            .filter(|row| match &filter {
                OwnerFilter::FirstName(v) => row.first_name == *v,
                OwnerFilter::LastName(v) => row.last_name == *v,
                OwnerFilter::City(v) => row.city == *v,
            })
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<owner::Model>> {
        Ok(self.owners.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool> {
        Ok(self.owners.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl RecordStore<Vet> for MemoryStore {
    async fn insert(&self, mut entity: vet::ActiveModel) -> AppResult<vet::Model> {
        let mut table = self.vets.write().await;
        let model = vet::Model {
            id: table.issue_id(),
            first_name: entity.first_name.take().unwrap_or_default(),
            last_name: entity.last_name.take().unwrap_or_default(),
        };
        table.rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, mut entity: vet::ActiveModel) -> AppResult<Option<vet::Model>> {
        let Some(id) = entity.id.take() else {
            return Ok(None);
        };
        let mut table = self.vets.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        let model = vet::Model {
            id,
            first_name: entity.first_name.take().unwrap_or_default(),
            last_name: entity.last_name.take().unwrap_or_default(),
        };
        table.rows.insert(id, model.clone());
        Ok(Some(model))
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<vet::Model>> {
        Ok(self.vets.read().await.rows.get(&id).cloned())
    }

    async fn find_by(&self, filter: VetFilter) -> AppResult<Vec<vet::Model>> {
        let table = self.vets.read().await;
        Ok(table
            .rows
            .values()
            .filter(|row| match &filter {
                VetFilter::FirstName(v) => row.first_name == *v,
                VetFilter::LastName(v) => row.last_name == *v,
            })
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<vet::Model>> {
        Ok(self.vets.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool> {
        Ok(self.vets.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl RecordStore<Specialty> for MemoryStore {
    async fn insert(&self, mut entity: specialty::ActiveModel) -> AppResult<specialty::Model> {
        let mut table = self.specialties.write().await;
        let model = specialty::Model {
            id: table.issue_id(),
            name: entity.name.take().unwrap_or_default(),
        };
        table.rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, mut entity: specialty::ActiveModel) -> AppResult<Option<specialty::Model>> {
        let Some(id) = entity.id.take() else {
            return Ok(None);
        };
        let mut table = self.specialties.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        let model = specialty::Model {
            id,
            name: entity.name.take().unwrap_or_default(),
        };
        table.rows.insert(id, model.clone());
        Ok(Some(model))
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<specialty::Model>> {
        Ok(self.specialties.read().await.rows.get(&id).cloned())
    }

    async fn find_by(&self, filter: SpecialtyFilter) -> AppResult<Vec<specialty::Model>> {
        let table = self.specialties.read().await;
        Ok(table
            .rows
            .values()
            .filter(|row| match &filter {
                SpecialtyFilter::Name(v) => row.name == *v,
            })
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<specialty::Model>> {
        Ok(self.specialties.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool> {
        Ok(self.specialties.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::{NotSet, Set};

    use super::*;

    fn specialty_row(name: &str) -> specialty::ActiveModel {
        specialty::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_issues_sequential_ids_starting_at_one() {
        let store = MemoryStore::default();

        let first = RecordStore::<Specialty>::insert(&store, specialty_row("radiology"))
            .await
            .unwrap();
        let second = RecordStore::<Specialty>::insert(&store, specialty_row("surgery"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_ignores_a_preset_identifier() {
        let store = MemoryStore::default();

        let row = specialty::ActiveModel {
            id: Set(99),
            name: Set("dentistry".to_string()),
        };
        let created = RecordStore::<Specialty>::insert(&store, row).await.unwrap();

        assert_eq!(created.id, 1);
        assert!(RecordStore::<Specialty>::find_by_id(&store, 99)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_misses_return_none_and_write_nothing() {
        let store = MemoryStore::default();

        let unmatched = specialty::ActiveModel {
            id: Set(4),
            name: Set("surgery".to_string()),
        };
        assert!(RecordStore::<Specialty>::update(&store, unmatched)
            .await
            .unwrap()
            .is_none());

        let unset = specialty_row("surgery");
        assert!(RecordStore::<Specialty>::update(&store, unset)
            .await
            .unwrap()
            .is_none());

        assert!(RecordStore::<Specialty>::find_all(&store)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_went_away() {
        let store = MemoryStore::default();
        let created = RecordStore::<Specialty>::insert(&store, specialty_row("radiology"))
            .await
            .unwrap();

        assert!(RecordStore::<Specialty>::delete_by_id(&store, created.id)
            .await
            .unwrap());
        assert!(!RecordStore::<Specialty>::delete_by_id(&store, created.id)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_find_all_returns_rows_in_id_order() {
        let store = MemoryStore::default();
        for name in ["radiology", "surgery", "dentistry"] {
            RecordStore::<Specialty>::insert(&store, specialty_row(name))
                .await
                .unwrap();
        }

        let all = RecordStore::<Specialty>::find_all(&store).await.unwrap();
        let ids: Vec<_> = all.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_find_by_matches_exact_field_equality_only() {
        let store = MemoryStore::default();
        let madison = owner::ActiveModel {
            id: NotSet,
            first_name: Set("George".to_string()),
            last_name: Set("Franklin".to_string()),
            address: Set("110 W. Liberty St.".to_string()),
            city: Set("Madison".to_string()),
            telephone: Set("6085551023".to_string()),
        };
        let sun_prairie = owner::ActiveModel {
            id: NotSet,
            first_name: Set("Betty".to_string()),
            last_name: Set("Davis".to_string()),
            address: Set("638 Cardinal Ave.".to_string()),
            city: Set("Sun Prairie".to_string()),
            telephone: Set("6085551749".to_string()),
        };
        RecordStore::<Owner>::insert(&store, madison).await.unwrap();
        RecordStore::<Owner>::insert(&store, sun_prairie)
            .await
            .unwrap();

        let matches =
            RecordStore::<Owner>::find_by(&store, OwnerFilter::City("Madison".to_string()))
                .await
                .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].first_name, "George");

        let none =
            RecordStore::<Owner>::find_by(&store, OwnerFilter::City("madison".to_string()))
                .await
                .unwrap();
        assert!(none.is_empty());
    }
}

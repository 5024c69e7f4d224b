//! SeaORM-backed record stores.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::domain::{Owner, OwnerFilter, RecordId, Specialty, SpecialtyFilter, Vet, VetFilter};
use crate::errors::{AppError, AppResult};

use super::entities::{owner, specialty, vet};
use super::record_store::RecordStore;

/// Durable store over a SeaORM connection; one trait impl per record kind.
#[derive(Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore<Owner> for SqlStore {
    async fn insert(&self, mut entity: owner::ActiveModel) -> AppResult<owner::Model> {
        entity.id = NotSet;
        entity.insert(&self.db).await.map_err(AppError::from)
    }

    async fn update(&self, entity: owner::ActiveModel) -> AppResult<Option<owner::Model>> {
        match entity.update(&self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<owner::Model>> {
        owner::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_by(&self, filter: OwnerFilter) -> AppResult<Vec<owner::Model>> {
        let condition = match filter {
            OwnerFilter::FirstName(v) => owner::Column::FirstName.eq(v),
            OwnerFilter::LastName(v) => owner::Column::LastName.eq(v),
            OwnerFilter::City(v) => owner::Column::City.eq(v),
        };

        owner::Entity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_all(&self) -> AppResult<Vec<owner::Model>> {
        owner::Entity::find()
            .order_by_asc(owner::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool> {
        let result = owner::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl RecordStore<Vet> for SqlStore {
    async fn insert(&self, mut entity: vet::ActiveModel) -> AppResult<vet::Model> {
        entity.id = NotSet;
        entity.insert(&self.db).await.map_err(AppError::from)
    }

    async fn update(&self, entity: vet::ActiveModel) -> AppResult<Option<vet::Model>> {
        match entity.update(&self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<vet::Model>> {
        vet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_by(&self, filter: VetFilter) -> AppResult<Vec<vet::Model>> {
        let condition = match filter {
            VetFilter::FirstName(v) => vet::Column::FirstName.eq(v),
            VetFilter::LastName(v) => vet::Column::LastName.eq(v),
        };

        vet::Entity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_all(&self) -> AppResult<Vec<vet::Model>> {
        vet::Entity::find()
            .order_by_asc(vet::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool> {
        let result = vet::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl RecordStore<Specialty> for SqlStore {
    async fn insert(&self, mut entity: specialty::ActiveModel) -> AppResult<specialty::Model> {
        entity.id = NotSet;
        entity.insert(&self.db).await.map_err(AppError::from)
    }

    async fn update(&self, entity: specialty::ActiveModel) -> AppResult<Option<specialty::Model>> {
        match entity.update(&self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<specialty::Model>> {
        specialty::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_by(&self, filter: SpecialtyFilter) -> AppResult<Vec<specialty::Model>> {
        let condition = match filter {
            SpecialtyFilter::Name(v) => specialty::Column::Name.eq(v),
        };

        specialty::Entity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_all(&self) -> AppResult<Vec<specialty::Model>> {
        specialty::Entity::find()
            .order_by_asc(specialty::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: RecordId) -> AppResult<bool> {
        let result = specialty::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

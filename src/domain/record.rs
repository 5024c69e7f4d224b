//! Contracts shared by every record kind.
//!
//! A record kind ties together the transfer object exchanged at the HTTP
//! boundary, the entity shape the store persists, the conversion between
//! the two, and the not-found identity its service raises.

use crate::errors::RecordNotFound;

/// Store-assigned record identifier.
pub type RecordId = i32;

/// Bidirectional conversion between a storage entity and its transfer
/// object.
///
/// Conversions are pure, total, and side-effect free: an absent optional
/// field maps to the field's default, never to a failure. The list forms
/// are element-wise and preserve order and length.
pub trait EntityMapper {
    /// Transfer object exchanged at the boundary.
    type Dto;
    /// Persisted row shape, as stored.
    type Entity;
    /// Write shape handed to the record store; the identifier stays unset
    /// for a transfer object that has not been persisted yet.
    type NewEntity;

    fn to_entity(dto: Self::Dto) -> Self::NewEntity;

    fn to_dto(entity: Self::Entity) -> Self::Dto;

    fn to_dto_list(entities: Vec<Self::Entity>) -> Vec<Self::Dto> {
        entities.into_iter().map(Self::to_dto).collect()
    }

    fn to_entity_list(dtos: Vec<Self::Dto>) -> Vec<Self::NewEntity> {
        dtos.into_iter().map(Self::to_entity).collect()
    }
}

/// Static description of one persisted record kind.
///
/// Implemented by the `Owner`, `Vet`, and `Specialty` markers; the generic
/// record service and stores are parameterized over it.
pub trait RecordKind: Send + Sync + 'static {
    type Dto: Clone + Send + Sync + 'static;
    type Entity: Send + Sync + 'static;
    type NewEntity: Send + Sync + 'static;
    /// Field-equality predicate accepted by lookups.
    type Filter: Send + Sync + 'static;
    type Mapper: EntityMapper<Dto = Self::Dto, Entity = Self::Entity, NewEntity = Self::NewEntity>;

    /// Kind name as it appears in log lines.
    const NAME: &'static str;

    /// Identifier carried by a transfer object, if any.
    fn dto_id(dto: &Self::Dto) -> Option<RecordId>;

    /// Not-found condition for this kind.
    fn not_found(id: RecordId) -> RecordNotFound;
}

//! Mappers between transfer objects and storage entities, plus the
//! `RecordKind` bindings built on them.
//!
//! Conversions are total: a transfer object with no identifier maps to a
//! write shape whose identifier is unset, and absent string fields map to
//! their defaults, so mapping never fails.

use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::{
    EntityMapper, Owner, OwnerDto, OwnerFilter, RecordId, RecordKind, Specialty, SpecialtyDto,
    SpecialtyFilter, Vet, VetDto, VetFilter,
};
use crate::errors::RecordNotFound;
use crate::infra::repositories::entities::{owner, specialty, vet};

/// Conversion between `OwnerDto` and `owners` rows.
pub struct OwnerMapper;

impl EntityMapper for OwnerMapper {
    type Dto = OwnerDto;
    type Entity = owner::Model;
    type NewEntity = owner::ActiveModel;

    fn to_entity(dto: OwnerDto) -> owner::ActiveModel {
        owner::ActiveModel {
            id: dto.id.map_or(NotSet, Set),
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            address: Set(dto.address),
            city: Set(dto.city),
            telephone: Set(dto.telephone),
        }
    }

    fn to_dto(entity: owner::Model) -> OwnerDto {
        OwnerDto {
            id: Some(entity.id),
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            city: entity.city,
            telephone: entity.telephone,
        }
    }
}

impl RecordKind for Owner {
    type Dto = OwnerDto;
    type Entity = owner::Model;
    type NewEntity = owner::ActiveModel;
    type Filter = OwnerFilter;
    type Mapper = OwnerMapper;

    const NAME: &'static str = "owner";

    fn dto_id(dto: &OwnerDto) -> Option<RecordId> {
        dto.id
    }

    fn not_found(id: RecordId) -> RecordNotFound {
        RecordNotFound::Owner(id)
    }
}

/// Conversion between `VetDto` and `vets` rows.
pub struct VetMapper;

impl EntityMapper for VetMapper {
    type Dto = VetDto;
    type Entity = vet::Model;
    type NewEntity = vet::ActiveModel;

    fn to_entity(dto: VetDto) -> vet::ActiveModel {
        vet::ActiveModel {
            id: dto.id.map_or(NotSet, Set),
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
        }
    }

    fn to_dto(entity: vet::Model) -> VetDto {
        VetDto {
            id: Some(entity.id),
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }
}

impl RecordKind for Vet {
    type Dto = VetDto;
    type Entity = vet::Model;
    type NewEntity = vet::ActiveModel;
    type Filter = VetFilter;
    type Mapper = VetMapper;

    const NAME: &'static str = "vet";

    fn dto_id(dto: &VetDto) -> Option<RecordId> {
        dto.id
    }

    fn not_found(id: RecordId) -> RecordNotFound {
        RecordNotFound::Vet(id)
    }
}

/// Conversion between `SpecialtyDto` and `specialties` rows.
pub struct SpecialtyMapper;

impl EntityMapper for SpecialtyMapper {
    type Dto = SpecialtyDto;
    type Entity = specialty::Model;
    type NewEntity = specialty::ActiveModel;

    fn to_entity(dto: SpecialtyDto) -> specialty::ActiveModel {
        specialty::ActiveModel {
            id: dto.id.map_or(NotSet, Set),
            name: Set(dto.name),
        }
    }

    fn to_dto(entity: specialty::Model) -> SpecialtyDto {
        SpecialtyDto {
            id: Some(entity.id),
            name: entity.name,
        }
    }
}

impl RecordKind for Specialty {
    type Dto = SpecialtyDto;
    type Entity = specialty::Model;
    type NewEntity = specialty::ActiveModel;
    type Filter = SpecialtyFilter;
    type Mapper = SpecialtyMapper;

    const NAME: &'static str = "specialty";

    fn dto_id(dto: &SpecialtyDto) -> Option<RecordId> {
        dto.id
    }

    fn not_found(id: RecordId) -> RecordNotFound {
        RecordNotFound::Specialty(id)
    }
}

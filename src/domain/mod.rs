//! Domain layer - transfer objects and record contracts
//!
//! Contains the shapes exchanged at the HTTP boundary and the contracts
//! (`EntityMapper`, `RecordKind`) the generic service layer is built on,
//! independent of any storage concern.

pub mod owner;
pub mod record;
pub mod specialty;
pub mod vet;

pub use owner::{Owner, OwnerDto, OwnerFilter};
pub use record::{EntityMapper, RecordId, RecordKind};
pub use specialty::{Specialty, SpecialtyDto, SpecialtyFilter};
pub use vet::{Vet, VetDto, VetFilter};

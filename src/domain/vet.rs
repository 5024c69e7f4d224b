//! Veterinarian records.
//!
//! Vets carry a many-to-many association with specialties at the storage
//! level; the CRUD surface exchanges only the fields below.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RecordId;

/// Kind marker for vet records.
#[derive(Debug, Clone, Copy)]
pub struct Vet;

/// Vet transfer object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetDto {
    /// Store-assigned identifier; absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<RecordId>,
    #[serde(default)]
    #[schema(example = "James")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Carter")]
    pub last_name: String,
}

/// Field-equality lookups supported for vets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VetFilter {
    FirstName(String),
    LastName(String),
}

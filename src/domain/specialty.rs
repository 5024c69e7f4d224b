//! Medical specialty records, referenced by vets.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RecordId;

/// Kind marker for specialty records.
#[derive(Debug, Clone, Copy)]
pub struct Specialty;

/// Specialty transfer object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyDto {
    /// Store-assigned identifier; absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<RecordId>,
    #[serde(default)]
    #[schema(example = "radiology")]
    pub name: String,
}

/// Field-equality lookups supported for specialties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialtyFilter {
    Name(String),
}

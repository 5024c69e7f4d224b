//! Owner records: the people whose pets the clinic treats.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RecordId;

/// Kind marker for owner records.
#[derive(Debug, Clone, Copy)]
pub struct Owner;

/// Owner transfer object.
///
/// String fields absent from an incoming body deserialize to the empty
/// string, so mapping to the stored shape never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    /// Store-assigned identifier; absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<RecordId>,
    #[serde(default)]
    #[schema(example = "George")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Franklin")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "110 W. Liberty St.")]
    pub address: String,
    #[serde(default)]
    #[schema(example = "Madison")]
    pub city: String,
    #[serde(default)]
    #[schema(example = "6085551023")]
    pub telephone: String,
}

/// Field-equality lookups supported for owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerFilter {
    FirstName(String),
    LastName(String),
    City(String),
}

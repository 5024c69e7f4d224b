//! Owner handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{OwnerDto, RecordId};
use crate::errors::AppResult;
use crate::types::Created;

/// Create owner routes
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_owners).post(create_owner))
        .route("/:id", get(get_owner).put(update_owner).delete(delete_owner))
}

/// List all owners
#[utoipa::path(
    get,
    path = "/owners",
    tag = "Owners",
    responses(
        (status = 200, description = "List of all owners", body = Vec<OwnerDto>)
    )
)]
pub async fn list_owners(State(state): State<AppState>) -> AppResult<Json<Vec<OwnerDto>>> {
    let owners = state.owners.find_all().await?;
    Ok(Json(owners))
}

/// Get owner by ID
#[utoipa::path(
    get,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner record", body = OwnerDto),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<OwnerDto>> {
    Ok(Json(state.owners.find_by_id(id).await?))
}

/// Create a new owner
#[utoipa::path(
    post,
    path = "/owners",
    tag = "Owners",
    request_body = OwnerDto,
    responses(
        (status = 201, description = "Owner created", body = OwnerDto)
    )
)]
pub async fn create_owner(
    State(state): State<AppState>,
    Json(body): Json<OwnerDto>,
) -> AppResult<Created<OwnerDto>> {
    let created = state.owners.create(body).await?;
    Ok(Created(created))
}

/// Update an existing owner
///
/// Fetches the current record (404 on a miss), overlays the mutable fields
/// from the body, then writes the merged record back.
#[utoipa::path(
    put,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    request_body = OwnerDto,
    responses(
        (status = 200, description = "Owner updated", body = OwnerDto),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(body): Json<OwnerDto>,
) -> AppResult<Json<OwnerDto>> {
    let mut merged = state.owners.find_by_id(id).await?;
    merged.first_name = body.first_name;
    merged.last_name = body.last_name;
    merged.address = body.address;
    merged.city = body.city;
    merged.telephone = body.telephone;

    let updated = state.owners.update(merged).await?;
    Ok(Json(updated))
}

/// Delete owner by ID
#[utoipa::path(
    delete,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<String> {
    state.owners.delete(id).await?;
    Ok(format!("Delete ID: {id}"))
}

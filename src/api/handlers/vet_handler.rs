//! Vet handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{RecordId, VetDto};
use crate::errors::AppResult;
use crate::types::Created;

/// Create vet routes
pub fn vet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vets).post(create_vet))
        .route("/:id", get(get_vet).put(update_vet).delete(delete_vet))
}

/// List all vets
#[utoipa::path(
    get,
    path = "/vets",
    tag = "Vets",
    responses(
        (status = 200, description = "List of all vets", body = Vec<VetDto>)
    )
)]
pub async fn list_vets(State(state): State<AppState>) -> AppResult<Json<Vec<VetDto>>> {
    let vets = state.vets.find_all().await?;
    Ok(Json(vets))
}

/// Get vet by ID
#[utoipa::path(
    get,
    path = "/vets/{id}",
    tag = "Vets",
    params(
        ("id" = i32, Path, description = "Vet ID")
    ),
    responses(
        (status = 200, description = "Vet record", body = VetDto),
        (status = 404, description = "Vet not found")
    )
)]
pub async fn get_vet(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<VetDto>> {
    Ok(Json(state.vets.find_by_id(id).await?))
}

/// Create a new vet
#[utoipa::path(
    post,
    path = "/vets",
    tag = "Vets",
    request_body = VetDto,
    responses(
        (status = 201, description = "Vet created", body = VetDto)
    )
)]
pub async fn create_vet(
    State(state): State<AppState>,
    Json(body): Json<VetDto>,
) -> AppResult<Created<VetDto>> {
    let created = state.vets.create(body).await?;
    Ok(Created(created))
}

/// Update an existing vet
#[utoipa::path(
    put,
    path = "/vets/{id}",
    tag = "Vets",
    params(
        ("id" = i32, Path, description = "Vet ID")
    ),
    request_body = VetDto,
    responses(
        (status = 200, description = "Vet updated", body = VetDto),
        (status = 404, description = "Vet not found")
    )
)]
pub async fn update_vet(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(body): Json<VetDto>,
) -> AppResult<Json<VetDto>> {
    let mut merged = state.vets.find_by_id(id).await?;
    merged.first_name = body.first_name;
    merged.last_name = body.last_name;

    let updated = state.vets.update(merged).await?;
    Ok(Json(updated))
}

/// Delete vet by ID
#[utoipa::path(
    delete,
    path = "/vets/{id}",
    tag = "Vets",
    params(
        ("id" = i32, Path, description = "Vet ID")
    ),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "Vet not found")
    )
)]
pub async fn delete_vet(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<String> {
    state.vets.delete(id).await?;
    Ok(format!("Delete ID: {id}"))
}

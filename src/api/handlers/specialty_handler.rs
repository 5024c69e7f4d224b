//! Specialty handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{RecordId, SpecialtyDto};
use crate::errors::AppResult;
use crate::types::Created;

/// Create specialty routes
pub fn specialty_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_specialties).post(create_specialty))
        .route(
            "/:id",
            get(get_specialty)
                .put(update_specialty)
                .delete(delete_specialty),
        )
}

/// List all specialties
#[utoipa::path(
    get,
    path = "/specialties",
    tag = "Specialties",
    responses(
        (status = 200, description = "List of all specialties", body = Vec<SpecialtyDto>)
    )
)]
pub async fn list_specialties(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SpecialtyDto>>> {
    let specialties = state.specialties.find_all().await?;
    Ok(Json(specialties))
}

/// Get specialty by ID
#[utoipa::path(
    get,
    path = "/specialties/{id}",
    tag = "Specialties",
    params(
        ("id" = i32, Path, description = "Specialty ID")
    ),
    responses(
        (status = 200, description = "Specialty record", body = SpecialtyDto),
        (status = 404, description = "Specialty not found")
    )
)]
pub async fn get_specialty(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<SpecialtyDto>> {
    Ok(Json(state.specialties.find_by_id(id).await?))
}

/// Create a new specialty
#[utoipa::path(
    post,
    path = "/specialties",
    tag = "Specialties",
    request_body = SpecialtyDto,
    responses(
        (status = 201, description = "Specialty created", body = SpecialtyDto)
    )
)]
pub async fn create_specialty(
    State(state): State<AppState>,
    Json(body): Json<SpecialtyDto>,
) -> AppResult<Created<SpecialtyDto>> {
    let created = state.specialties.create(body).await?;
    Ok(Created(created))
}

/// Update an existing specialty
#[utoipa::path(
    put,
    path = "/specialties/{id}",
    tag = "Specialties",
    params(
        ("id" = i32, Path, description = "Specialty ID")
    ),
    request_body = SpecialtyDto,
    responses(
        (status = 200, description = "Specialty updated", body = SpecialtyDto),
        (status = 404, description = "Specialty not found")
    )
)]
pub async fn update_specialty(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(body): Json<SpecialtyDto>,
) -> AppResult<Json<SpecialtyDto>> {
    let mut merged = state.specialties.find_by_id(id).await?;
    merged.name = body.name;

    let updated = state.specialties.update(merged).await?;
    Ok(Json(updated))
}

/// Delete specialty by ID
#[utoipa::path(
    delete,
    path = "/specialties/{id}",
    tag = "Specialties",
    params(
        ("id" = i32, Path, description = "Specialty ID")
    ),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "Specialty not found")
    )
)]
pub async fn delete_specialty(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<String> {
    state.specialties.delete(id).await?;
    Ok(format!("Delete ID: {id}"))
}

//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{owner_handler, specialty_handler, vet_handler};
use crate::domain::{OwnerDto, SpecialtyDto, VetDto};

/// OpenAPI documentation for the Pet Clinic API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Clinic API",
        version = "0.1.0",
        description = "A REST backend for veterinary clinic records with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Owner endpoints
        owner_handler::list_owners,
        owner_handler::get_owner,
        owner_handler::create_owner,
        owner_handler::update_owner,
        owner_handler::delete_owner,
        // Vet endpoints
        vet_handler::list_vets,
        vet_handler::get_vet,
        vet_handler::create_vet,
        vet_handler::update_vet,
        vet_handler::delete_vet,
        // Specialty endpoints
        specialty_handler::list_specialties,
        specialty_handler::get_specialty,
        specialty_handler::create_specialty,
        specialty_handler::update_specialty,
        specialty_handler::delete_specialty,
    ),
    components(
        schemas(
            OwnerDto,
            VetDto,
            SpecialtyDto,
        )
    ),
    tags(
        (name = "Owners", description = "Pet owner records"),
        (name = "Vets", description = "Veterinarian records"),
        (name = "Specialties", description = "Veterinary specialty records")
    )
)]
pub struct ApiDoc;

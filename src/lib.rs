//! Pet Clinic API - A REST backend for veterinary clinic records
//!
//! This crate manages the three record kinds a clinic keeps track of
//! (pet owners, vets, and vet specialties) behind a uniform CRUD API
//! with a consistent not-found contract.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Record kinds and their wire representations
//! - **mapper**: Conversions between wire and storage representations
//! - **services**: Record operations shared across all kinds
//! - **infra**: Infrastructure concerns (database, record stores)
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod mapper;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Owner, OwnerDto, Specialty, SpecialtyDto, Vet, VetDto};
pub use errors::{AppError, AppResult, RecordNotFound};

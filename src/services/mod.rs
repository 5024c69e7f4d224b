//! Service layer - Business logic
//!
//! One generic service carries the CRUD contract for every record kind;
//! the kind markers pick the mapper, store types, and error identity.

mod record_service;

pub use record_service::RecordService;

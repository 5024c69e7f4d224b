//! Shared helpers for API integration tests.
//!
//! Tests run against the real router backed by the in-memory store, so
//! no database is required. Each test gets its own server on an
//! ephemeral port with a small seeded dataset:
//!
//! - owners 1-4: Franklin, Davis, Rodriquez, McTavish
//! - vets 1-2: Carter, Leary
//! - specialties 1-2: radiology, surgery

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use petclinic_api::api::{create_router, AppState};
use petclinic_api::domain::{OwnerDto, SpecialtyDto, VetDto};
use petclinic_api::infra::MemoryStore;

pub struct TestApp {
    pub base_url: String,
}

/// Start the API on an ephemeral port and seed the well-known records.
pub async fn spawn_app() -> TestApp {
    let state = AppState::from_store(Arc::new(MemoryStore::default()));
    seed(&state).await;

    let app = create_router(state);
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("listener address");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    TestApp { base_url }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

pub fn owner(first: &str, last: &str, address: &str, city: &str, telephone: &str) -> OwnerDto {
    OwnerDto {
        id: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        telephone: telephone.to_string(),
    }
}

pub fn vet(first: &str, last: &str) -> VetDto {
    VetDto {
        id: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

pub fn specialty(name: &str) -> SpecialtyDto {
    SpecialtyDto {
        id: None,
        name: name.to_string(),
    }
}

async fn seed(state: &AppState) {
    let owners = [
        owner("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
        owner("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
        owner("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
        owner("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    ];
    for dto in owners {
        state.owners.create(dto).await.expect("seed owner");
    }

    for (first, last) in [("James", "Carter"), ("Helen", "Leary")] {
        state.vets.create(vet(first, last)).await.expect("seed vet");
    }

    for name in ["radiology", "surgery"] {
        state
            .specialties
            .create(specialty(name))
            .await
            .expect("seed specialty");
    }
}

//! Owner endpoint integration tests.

mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{client, spawn_app};

// =============================================================================
// Read Endpoints
// =============================================================================

#[tokio::test]
async fn test_list_owners_returns_seeded_records_in_id_order() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/owners", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.expect("json body");
    let owners = body.as_array().expect("array body");
    assert_eq!(owners.len(), 4);
    assert_eq!(owners[0]["id"], 1);
    assert_eq!(owners[0]["lastName"], "Franklin");
    assert_eq!(owners[3]["id"], 4);
    assert_eq!(owners[3]["lastName"], "McTavish");
}

#[tokio::test]
async fn test_get_owner_returns_every_field() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/owners/1", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "George");
    assert_eq!(body["lastName"], "Franklin");
    assert_eq!(body["address"], "110 W. Liberty St.");
    assert_eq!(body["city"], "Madison");
    assert_eq!(body["telephone"], "6085551023");
}

#[tokio::test]
async fn test_owner_fields_serialize_as_camel_case() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/owners/1", app.base_url))
        .send()
        .await
        .expect("request");

    let body: Value = res.json().await.expect("json body");
    assert!(body.get("firstName").is_some());
    assert!(body.get("first_name").is_none());
}

#[tokio::test]
async fn test_get_missing_owner_returns_404() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/owners/2000", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "owner not found: id=2000");
}

// =============================================================================
// Create / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_create_owner_returns_201_with_assigned_id() {
    let app = spawn_app().await;

    let res = client()
        .post(format!("{}/owners", app.base_url))
        .json(&json!({
            "firstName": "Juan",
            "lastName": "Perez",
            "address": "Av. Brasil 123",
            "city": "Lima",
            "telephone": "987654321"
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["id"], 5);
    assert_eq!(body["firstName"], "Juan");
    assert_eq!(body["city"], "Lima");
}

#[tokio::test]
async fn test_update_owner_overlays_mutable_fields() {
    let app = spawn_app().await;
    let c = client();

    let created: Value = c
        .post(format!("{}/owners", app.base_url))
        .json(&json!({
            "firstName": "Carlos",
            "lastName": "Ramirez",
            "address": "Calle Sol 45",
            "city": "Cusco",
            "telephone": "955512345"
        }))
        .send()
        .await
        .expect("create request")
        .json()
        .await
        .expect("create body");
    let id = created["id"].as_i64().expect("assigned id");

    let res = c
        .put(format!("{}/owners/{}", app.base_url, id))
        .json(&json!({
            "firstName": "Roberto",
            "lastName": "Sanchez",
            "address": "Av. Mar 900",
            "city": "Trujillo",
            "telephone": "944119911"
        }))
        .send()
        .await
        .expect("update request");
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Value = c
        .get(format!("{}/owners/{}", app.base_url, id))
        .send()
        .await
        .expect("get request")
        .json()
        .await
        .expect("get body");
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["firstName"], "Roberto");
    assert_eq!(fetched["city"], "Trujillo");
}

#[tokio::test]
async fn test_update_missing_owner_returns_404() {
    let app = spawn_app().await;

    let res = client()
        .put(format!("{}/owners/1999", app.base_url))
        .json(&json!({
            "firstName": "Nadie",
            "lastName": "Nunca",
            "address": "-",
            "city": "-",
            "telephone": "-"
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_owner_returns_confirmation_text() {
    let app = spawn_app().await;
    let c = client();

    let created: Value = c
        .post(format!("{}/owners", app.base_url))
        .json(&json!({
            "firstName": "Ana",
            "lastName": "Torres",
            "address": "Jr. Luna 7",
            "city": "Arequipa",
            "telephone": "911223344"
        }))
        .send()
        .await
        .expect("create request")
        .json()
        .await
        .expect("create body");
    let id = created["id"].as_i64().expect("assigned id");

    let res = c
        .delete(format!("{}/owners/{}", app.base_url, id))
        .send()
        .await
        .expect("delete request");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.expect("delete body"),
        format!("Delete ID: {}", id)
    );

    let res = c
        .get(format!("{}/owners/{}", app.base_url, id))
        .send()
        .await
        .expect("get request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_owner_leaves_records_untouched() {
    let app = spawn_app().await;
    let c = client();

    let res = c
        .delete(format!("{}/owners/2000", app.base_url))
        .send()
        .await
        .expect("delete request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = c
        .get(format!("{}/owners", app.base_url))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("list body");
    assert_eq!(body.as_array().expect("array body").len(), 4);
}

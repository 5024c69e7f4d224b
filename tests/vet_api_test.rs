//! Vet endpoint integration tests.

mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{client, spawn_app};

#[tokio::test]
async fn test_list_vets_returns_seeded_records() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/vets", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.expect("json body");
    let vets = body.as_array().expect("array body");
    assert_eq!(vets.len(), 2);
    assert_eq!(vets[0]["id"], 1);
    assert_eq!(vets[0]["firstName"], "James");
    assert_eq!(vets[0]["lastName"], "Carter");
}

#[tokio::test]
async fn test_get_vet_by_id_returns_record() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/vets/1", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["id"], 1);
    assert_eq!(body["lastName"], "Carter");
}

#[tokio::test]
async fn test_get_missing_vet_returns_404() {
    let app = spawn_app().await;

    let res = client()
        .get(format!("{}/vets/666", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "vet not found: id=666");
}

#[tokio::test]
async fn test_create_vet_returns_201_with_assigned_id() {
    let app = spawn_app().await;

    let res = client()
        .post(format!("{}/vets", app.base_url))
        .json(&json!({
            "firstName": "Maria",
            "lastName": "Rodriguez"
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["id"], 3);
    assert_eq!(body["firstName"], "Maria");
    assert_eq!(body["lastName"], "Rodriguez");
}

#[tokio::test]
async fn test_update_vet_overlays_name_fields() {
    let app = spawn_app().await;
    let c = client();

    let created: Value = c
        .post(format!("{}/vets", app.base_url))
        .json(&json!({
            "firstName": "Carlos",
            "lastName": "Mendez"
        }))
        .send()
        .await
        .expect("create request")
        .json()
        .await
        .expect("create body");
    let id = created["id"].as_i64().expect("assigned id");

    let res = c
        .put(format!("{}/vets/{}", app.base_url, id))
        .json(&json!({
            "firstName": "Pablo",
            "lastName": "Garcia"
        }))
        .send()
        .await
        .expect("update request");
    assert_eq!(res.status(), StatusCode::OK);

    let updated: Value = res.json().await.expect("update body");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["firstName"], "Pablo");
    assert_eq!(updated["lastName"], "Garcia");
}

#[tokio::test]
async fn test_update_missing_vet_returns_404() {
    let app = spawn_app().await;

    let res = client()
        .put(format!("{}/vets/1000", app.base_url))
        .json(&json!({
            "firstName": "Nadie",
            "lastName": "Nunca"
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_vet_then_lookup_returns_404() {
    let app = spawn_app().await;
    let c = client();

    let created: Value = c
        .post(format!("{}/vets", app.base_url))
        .json(&json!({
            "firstName": "Pedro",
            "lastName": "Sanchez"
        }))
        .send()
        .await
        .expect("create request")
        .json()
        .await
        .expect("create body");
    let id = created["id"].as_i64().expect("assigned id");

    let res = c
        .delete(format!("{}/vets/{}", app.base_url, id))
        .send()
        .await
        .expect("delete request");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.expect("delete body"),
        format!("Delete ID: {}", id)
    );

    let res = c
        .get(format!("{}/vets/{}", app.base_url, id))
        .send()
        .await
        .expect("get request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_vet_returns_404() {
    let app = spawn_app().await;

    let res = client()
        .delete(format!("{}/vets/1000", app.base_url))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

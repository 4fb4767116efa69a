//! HTTP-level integration tests for the `/api/packages` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json, put_multipart};
use serde_json::json;

#[tokio::test]
async fn test_create_package_with_only_name() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/packages/new", json!({ "name": "serde" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "serde");
    assert_eq!(json["link"], "");
    assert_eq!(json["description"], "");
    assert_eq!(json["stacks"], json!([]));
}

#[tokio::test]
async fn test_create_package_without_name_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/packages/new",
        json!({ "link": "https://crates.io/crates/serde" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Package name is required");
}

#[tokio::test]
async fn test_package_crud_flow() {
    let app = common::build_test_app();
    let id = create(
        &app,
        "packages",
        json!({
            "name": "folio-ui",
            "link": "https://npmjs.com/folio-ui",
            "description": "Components",
            "stacks": ["svelte"]
        }),
    )
    .await;

    let response = put_json(
        &app,
        &format!("/api/packages/{id}"),
        json!({ "description": "UI components" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "folio-ui");
    assert_eq!(json["description"], "UI components");
    assert_eq!(json["stacks"], json!(["svelte"]));

    let response = delete(&app, &format!("/api/packages/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Package deleted successfully"
    );

    let response = get(&app, &format!("/api/packages/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Package with id {id} not found")
    );
}

#[tokio::test]
async fn test_update_package_from_form_ignores_unknown_fields() {
    let app = common::build_test_app();
    let id = create(&app, "packages", json!({ "name": "tokio" })).await;

    let response = put_multipart(
        &app,
        &format!("/api/packages/{id}"),
        &[("link", "https://tokio.rs"), ("unrelated", "ignored")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "tokio");
    assert_eq!(json["link"], "https://tokio.rs");
}

#[tokio::test]
async fn test_package_ids_are_independent_of_projects() {
    let app = common::build_test_app();
    create(
        &app,
        "projects",
        json!({
            "name": "p",
            "imageUrl": "i",
            "link": "l",
            "description": "d"
        }),
    )
    .await;

    let id = create(&app, "packages", json!({ "name": "first" })).await;
    assert_eq!(id, 1);
}

#[tokio::test]
async fn test_delete_package_with_non_integer_id_returns_400() {
    let app = common::build_test_app();
    let response = delete(&app, "/api/packages/1.5").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid package ID");
}

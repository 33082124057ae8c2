mod common;

use axum::http::Method;
use serde_json::json;

use common::{response_json, TestApp};

#[tokio::test]
async fn product_lifecycle() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/products",
            Some(json!({ "code": "P-1", "name": "Chair", "value": 149.9 })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let created = response_json(response).await;
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["code"], "P-1");
    assert_eq!(created["value"], 149.9);

    let response = app.request(Method::GET, &format!("/products/{}", id), None).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await, created);

    let response = app
        .request(
            Method::PUT,
            &format!("/products/{}", id),
            Some(json!({ "code": "P-1", "name": "Armchair", "value": 199.0 })),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated = response_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Armchair");
    assert_eq!(updated["value"], 199.0);

    let response = app.request(Method::GET, "/products", None).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await, json!([updated]));

    let response = app
        .request(Method::DELETE, &format!("/products/{}", id), None)
        .await;
    assert_eq!(response.status(), 204);

    let response = app.request(Method::GET, &format!("/products/{}", id), None).await;
    assert_eq!(response.status(), 404);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], format!("Product with ID {} not found", id));
}

#[tokio::test]
async fn products_are_listed_in_id_order() {
    let app = TestApp::new().await;
    let first = app.create_product("B", 1.0).await;
    let second = app.create_product("A", 2.0).await;

    let response = app.request(Method::GET, "/products", None).await;
    let ids: Vec<i64> = response_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn create_with_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/products",
            Some(json!({ "id": 5, "code": "P", "name": "P", "value": 1.0 })),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response_json(response).await["message"],
        "Product ID must be null for creation"
    );

    let response = app
        .request(
            Method::POST,
            "/rawmaterials",
            Some(json!({ "id": 5, "code": "M", "name": "M", "quantityInStock": 1 })),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response_json(response).await["message"],
        "RawMaterial ID must be null for creation"
    );

    let response = app
        .request(
            Method::POST,
            "/productrawmaterials",
            Some(json!({
                "id": 5,
                "product": { "id": 1 },
                "rawMaterial": { "id": 1 },
                "quantityNeeded": 1
            })),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response_json(response).await["message"],
        "ID must be null for creation"
    );
}

#[tokio::test]
async fn invalid_fields_are_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/products",
            Some(json!({ "code": "", "name": "Nameless", "value": 1.0 })),
        )
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(
            Method::POST,
            "/products",
            Some(json!({ "code": "NEG", "name": "Negative", "value": -0.5 })),
        )
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(
            Method::POST,
            "/rawmaterials",
            Some(json!({ "code": "M", "name": "M", "quantityInStock": -1 })),
        )
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn incomplete_or_malformed_bodies_are_bad_requests() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/products",
            Some(json!({ "code": "X", "name": "No value" })),
        )
        .await;
    assert_eq!(response.status(), 400);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let response = app
        .request(
            Method::POST,
            "/productrawmaterials",
            Some(json!({ "product": { "id": 1 }, "rawMaterial": { "id": 1 } })),
        )
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(
            Method::PUT,
            "/rawmaterials/1",
            Some(json!({ "code": "M", "name": "M", "quantityInStock": "many" })),
        )
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn duplicate_code_conflicts() {
    let app = TestApp::new().await;
    app.create_raw_material("DUP", 1).await;

    let response = app
        .request(
            Method::POST,
            "/rawmaterials",
            Some(json!({ "code": "DUP", "name": "Again", "quantityInStock": 2 })),
        )
        .await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn missing_rows_return_not_found() {
    let app = TestApp::new().await;

    for uri in ["/products/99", "/rawmaterials/99", "/productrawmaterials/99"] {
        let response = app.request(Method::GET, uri, None).await;
        assert_eq!(response.status(), 404, "GET {}", uri);

        let response = app.request(Method::DELETE, uri, None).await;
        assert_eq!(response.status(), 404, "DELETE {}", uri);
    }

    let response = app
        .request(
            Method::PUT,
            "/rawmaterials/99",
            Some(json!({ "code": "M", "name": "M", "quantityInStock": 1 })),
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn requirement_edges_embed_both_ends() {
    let app = TestApp::new().await;
    let chair = app.create_product("CHAIR", 10.0).await;
    let wood = app.create_raw_material("WOOD", 10).await;
    let edge = app.create_requirement(chair, wood, 2).await;

    let response = app
        .request(Method::GET, &format!("/productrawmaterials/{}", edge), None)
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["id"], edge);
    assert_eq!(body["quantityNeeded"], 2);
    assert_eq!(body["product"]["id"], chair);
    assert_eq!(body["product"]["code"], "CHAIR");
    assert_eq!(body["rawMaterial"]["id"], wood);
    assert_eq!(body["rawMaterial"]["quantityInStock"], 10);

    let response = app
        .request(
            Method::GET,
            &format!("/productrawmaterials/byProduct/{}", chair),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await, json!([body]));

    let response = app
        .request(Method::GET, "/productrawmaterials/byProduct/4242", None)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn requirement_with_unknown_reference_is_rejected() {
    let app = TestApp::new().await;
    let chair = app.create_product("CHAIR", 10.0).await;
    let wood = app.create_raw_material("WOOD", 10).await;

    for payload in [
        json!({ "product": { "id": chair }, "rawMaterial": { "id": 777 }, "quantityNeeded": 1 }),
        json!({ "product": { "id": 777 }, "rawMaterial": { "id": wood }, "quantityNeeded": 1 }),
        json!({ "rawMaterial": { "id": wood }, "quantityNeeded": 1 }),
    ] {
        let response = app
            .request(Method::POST, "/productrawmaterials", Some(payload))
            .await;
        assert_eq!(response.status(), 400);
        assert_eq!(
            response_json(response).await["message"],
            "Product or RawMaterial not found"
        );
    }
}

#[tokio::test]
async fn requirement_update_and_delete() {
    let app = TestApp::new().await;
    let chair = app.create_product("CHAIR", 10.0).await;
    let wood = app.create_raw_material("WOOD", 10).await;
    let glue = app.create_raw_material("GLUE", 3).await;
    let edge = app.create_requirement(chair, wood, 2).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/productrawmaterials/{}", edge),
            Some(json!({
                "product": { "id": chair },
                "rawMaterial": { "id": glue },
                "quantityNeeded": 1
            })),
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["rawMaterial"]["code"], "GLUE");
    assert_eq!(body["quantityNeeded"], 1);

    let suggestions = app.suggestions().await;
    assert_eq!(suggestions[0]["quantityProducible"], 3);

    let response = app
        .request(
            Method::PUT,
            &format!("/productrawmaterials/{}", edge),
            Some(json!({
                "product": { "id": chair },
                "rawMaterial": { "id": 999 },
                "quantityNeeded": 1
            })),
        )
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(
            Method::DELETE,
            &format!("/productrawmaterials/{}", edge),
            None,
        )
        .await;
    assert_eq!(response.status(), 204);
    assert!(app.suggestions().await.is_empty());
}

#[tokio::test]
async fn deleting_a_referenced_product_conflicts() {
    let app = TestApp::new().await;
    let chair = app.create_product("CHAIR", 10.0).await;
    let wood = app.create_raw_material("WOOD", 10).await;
    app.create_requirement(chair, wood, 2).await;

    let response = app
        .request(Method::DELETE, &format!("/products/{}", chair), None)
        .await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn health_endpoints_report_status() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["environment"], "test");

    let response = app.request(Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await["status"], "ready");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), 200);
    let doc = response_json(response).await;
    assert!(doc["paths"]["/production/suggested"].is_object());
}

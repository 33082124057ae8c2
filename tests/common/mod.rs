#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use inventory_management_api::{
    app_router,
    config::AppConfig,
    db::{self, DbConfig},
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper harness for spinning up an application state backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with a freshly migrated database.
    pub async fn new() -> Self {
        let app = Self::without_schema().await;
        db::run_migrations(&app.state.db)
            .await
            .expect("failed to run migrations in tests");
        app
    }

    /// Application whose database has no tables, so every query fails.
    pub async fn without_schema() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // A single long-lived connection keeps the in-memory database alive.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_with_config(&DbConfig::from(&cfg))
            .await
            .expect("failed to create test database");

        let state = AppState::new(Arc::new(pool), cfg);
        Self {
            router: app_router(state.clone()),
            state,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Creates a product through the API and returns its id.
    pub async fn create_product(&self, code: &str, value: f64) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/products",
                Some(json!({ "code": code, "name": format!("Product {}", code), "value": value })),
            )
            .await;
        assert_eq!(response.status(), 201, "create product {}", code);
        response_json(response).await["id"]
            .as_i64()
            .expect("product id")
    }

    /// Creates a raw material through the API and returns its id.
    pub async fn create_raw_material(&self, code: &str, quantity_in_stock: i32) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/rawmaterials",
                Some(json!({
                    "code": code,
                    "name": format!("Material {}", code),
                    "quantityInStock": quantity_in_stock
                })),
            )
            .await;
        assert_eq!(response.status(), 201, "create raw material {}", code);
        response_json(response).await["id"]
            .as_i64()
            .expect("raw material id")
    }

    /// Links a product to a raw material and returns the edge id.
    pub async fn create_requirement(
        &self,
        product_id: i64,
        raw_material_id: i64,
        quantity_needed: i32,
    ) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/productrawmaterials",
                Some(json!({
                    "product": { "id": product_id },
                    "rawMaterial": { "id": raw_material_id },
                    "quantityNeeded": quantity_needed
                })),
            )
            .await;
        assert_eq!(response.status(), 201, "create requirement");
        response_json(response).await["id"]
            .as_i64()
            .expect("requirement id")
    }

    pub async fn suggestions(&self) -> Vec<Value> {
        let response = self
            .request(Method::GET, "/production/suggested", None)
            .await;
        assert_eq!(response.status(), 200);
        response_json(response)
            .await
            .as_array()
            .cloned()
            .expect("suggestion array")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

use super::common::{
    created_response, map_service_error, no_content_response, reject_client_id, success_response,
    validate_input, JsonBody,
};
use crate::{
    entities::product,
    errors::ApiError,
    handlers::AppState,
    services::products::ProductInput,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Creates the router for product endpoints
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Product body for create and update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Must be absent on create. Ignored on update.
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "P-100")]
    pub code: String,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Wooden chair")]
    pub name: String,
    #[validate(range(min = 0.0))]
    #[schema(example = 149.9)]
    pub value: f64,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            value: request.value,
        }
    }
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Product with ID {} not found", id))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products ordered by id", body = [product::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .services
        .products
        .list_products()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product returned", body = product::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .get_product(id)
        .await
        .map_err(map_service_error)?
        .map(success_response)
        .ok_or_else(|| not_found(id))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = product::Model),
        (status = 400, description = "Invalid request or id supplied", body = crate::errors::ErrorResponse),
        (status = 409, description = "Code already in use", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    reject_client_id(payload.id, "Product ID must be null for creation")?;
    validate_input(&payload)?;

    let created = state
        .services
        .products
        .create_product(payload.into())
        .await
        .map_err(map_service_error)?;

    Ok(created_response(created))
}

/// Replace a product's code, name and value
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = product::Model),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Code already in use", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .products
        .update_product(id, payload.into())
        .await
        .map_err(map_service_error)?
        .map(success_response)
        .ok_or_else(|| not_found(id))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Product is still used by a requirement", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .services
        .products
        .delete_product(id)
        .await
        .map_err(map_service_error)?;

    if deleted {
        Ok(no_content_response())
    } else {
        Err(not_found(id))
    }
}

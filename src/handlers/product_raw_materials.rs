use super::common::{
    created_response, map_service_error, no_content_response, reject_client_id, success_response,
    JsonBody,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::product_raw_materials::{ProductRawMaterialDetails, ProductRawMaterialInput},
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Creates the router for bill-of-materials edge endpoints
pub fn product_raw_material_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_product_raw_materials).post(create_product_raw_material),
        )
        .route(
            "/:id",
            get(get_product_raw_material)
                .put(update_product_raw_material)
                .delete(delete_product_raw_material),
        )
        .route("/byProduct/:product_id", get(list_by_product))
}

/// Reference to an existing row by id
#[derive(Debug, Deserialize, ToSchema)]
pub struct EntityReference {
    pub id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRawMaterialRequest {
    /// Must be absent on create. Ignored on update.
    pub id: Option<i32>,
    pub product: Option<EntityReference>,
    pub raw_material: Option<EntityReference>,
    /// Units of raw material per unit of product
    #[schema(example = 2)]
    pub quantity_needed: i32,
}

impl From<ProductRawMaterialRequest> for ProductRawMaterialInput {
    fn from(request: ProductRawMaterialRequest) -> Self {
        Self {
            product_id: request.product.and_then(|reference| reference.id),
            raw_material_id: request.raw_material.and_then(|reference| reference.id),
            quantity_needed: request.quantity_needed,
        }
    }
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("ProductRawMaterial with ID {} not found", id))
}

/// List all requirement edges
#[utoipa::path(
    get,
    path = "/productrawmaterials",
    responses(
        (status = 200, description = "All edges ordered by id", body = [ProductRawMaterialDetails]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "product-raw-materials"
)]
pub async fn list_product_raw_materials(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let edges = state
        .services
        .product_raw_materials
        .list_product_raw_materials()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(edges))
}

/// Get a requirement edge by ID
#[utoipa::path(
    get,
    path = "/productrawmaterials/{id}",
    params(("id" = i32, Path, description = "Edge ID")),
    responses(
        (status = 200, description = "Edge returned", body = ProductRawMaterialDetails),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "product-raw-materials"
)]
pub async fn get_product_raw_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .product_raw_materials
        .get_product_raw_material(id)
        .await
        .map_err(map_service_error)?
        .map(success_response)
        .ok_or_else(|| not_found(id))
}

/// List the raw materials a product needs
#[utoipa::path(
    get,
    path = "/productrawmaterials/byProduct/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Edges of the product, possibly empty", body = [ProductRawMaterialDetails]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "product-raw-materials"
)]
pub async fn list_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let edges = state
        .services
        .product_raw_materials
        .list_by_product(product_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(edges))
}

/// Create a requirement edge
#[utoipa::path(
    post,
    path = "/productrawmaterials",
    request_body = ProductRawMaterialRequest,
    responses(
        (status = 201, description = "Edge created", body = ProductRawMaterialDetails),
        (status = 400, description = "Id supplied or unknown product/raw material", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "product-raw-materials"
)]
pub async fn create_product_raw_material(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductRawMaterialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    reject_client_id(payload.id, "ID must be null for creation")?;

    let created = state
        .services
        .product_raw_materials
        .create_product_raw_material(payload.into())
        .await
        .map_err(map_service_error)?;

    Ok(created_response(created))
}

/// Replace a requirement edge
#[utoipa::path(
    put,
    path = "/productrawmaterials/{id}",
    params(("id" = i32, Path, description = "Edge ID")),
    request_body = ProductRawMaterialRequest,
    responses(
        (status = 200, description = "Edge updated", body = ProductRawMaterialDetails),
        (status = 400, description = "Unknown product/raw material", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "product-raw-materials"
)]
pub async fn update_product_raw_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ProductRawMaterialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .product_raw_materials
        .update_product_raw_material(id, payload.into())
        .await
        .map_err(map_service_error)?
        .map(success_response)
        .ok_or_else(|| not_found(id))
}

/// Delete a requirement edge
#[utoipa::path(
    delete,
    path = "/productrawmaterials/{id}",
    params(("id" = i32, Path, description = "Edge ID")),
    responses(
        (status = 204, description = "Edge deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "product-raw-materials"
)]
pub async fn delete_product_raw_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .services
        .product_raw_materials
        .delete_product_raw_material(id)
        .await
        .map_err(map_service_error)?;

    if deleted {
        Ok(no_content_response())
    } else {
        Err(not_found(id))
    }
}

use super::common::{
    created_response, map_service_error, no_content_response, reject_client_id, success_response,
    validate_input, JsonBody,
};
use crate::{
    entities::raw_material,
    errors::ApiError,
    handlers::AppState,
    services::raw_materials::RawMaterialInput,
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

/// Creates the router for raw material endpoints
pub fn raw_material_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_raw_materials).post(create_raw_material))
        .route(
            "/:id",
            get(get_raw_material)
                .put(update_raw_material)
                .delete(delete_raw_material),
        )
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialRequest {
    /// Must be absent on create. Ignored on update.
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "RM-WOOD")]
    pub code: String,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Oak plank")]
    pub name: String,
    #[validate(range(min = 0))]
    #[schema(example = 120)]
    pub quantity_in_stock: i32,
}

impl From<RawMaterialRequest> for RawMaterialInput {
    fn from(request: RawMaterialRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            quantity_in_stock: request.quantity_in_stock,
        }
    }
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("RawMaterial with ID {} not found", id))
}

/// List all raw materials
#[utoipa::path(
    get,
    path = "/rawmaterials",
    responses(
        (status = 200, description = "All raw materials ordered by id", body = [raw_material::Model]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "raw-materials"
)]
pub async fn list_raw_materials(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let raw_materials = state
        .services
        .raw_materials
        .list_raw_materials()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(raw_materials))
}

/// Get a raw material by ID
#[utoipa::path(
    get,
    path = "/rawmaterials/{id}",
    params(("id" = i32, Path, description = "Raw material ID")),
    responses(
        (status = 200, description = "Raw material returned", body = raw_material::Model),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "raw-materials"
)]
pub async fn get_raw_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .raw_materials
        .get_raw_material(id)
        .await
        .map_err(map_service_error)?
        .map(success_response)
        .ok_or_else(|| not_found(id))
}

/// Create a raw material
#[utoipa::path(
    post,
    path = "/rawmaterials",
    request_body = RawMaterialRequest,
    responses(
        (status = 201, description = "Raw material created", body = raw_material::Model),
        (status = 400, description = "Invalid request or id supplied", body = crate::errors::ErrorResponse),
        (status = 409, description = "Code already in use", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "raw-materials"
)]
pub async fn create_raw_material(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RawMaterialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    reject_client_id(payload.id, "RawMaterial ID must be null for creation")?;
    validate_input(&payload)?;

    let created = state
        .services
        .raw_materials
        .create_raw_material(payload.into())
        .await
        .map_err(map_service_error)?;

    Ok(created_response(created))
}

/// Replace a raw material, including its stock level
#[utoipa::path(
    put,
    path = "/rawmaterials/{id}",
    params(("id" = i32, Path, description = "Raw material ID")),
    request_body = RawMaterialRequest,
    responses(
        (status = 200, description = "Raw material updated", body = raw_material::Model),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Code already in use", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "raw-materials"
)]
pub async fn update_raw_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<RawMaterialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    state
        .services
        .raw_materials
        .update_raw_material(id, payload.into())
        .await
        .map_err(map_service_error)?
        .map(success_response)
        .ok_or_else(|| not_found(id))
}

/// Delete a raw material
#[utoipa::path(
    delete,
    path = "/rawmaterials/{id}",
    params(("id" = i32, Path, description = "Raw material ID")),
    responses(
        (status = 204, description = "Raw material deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Raw material is still used by a requirement", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "raw-materials"
)]
pub async fn delete_raw_material(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .services
        .raw_materials
        .delete_raw_material(id)
        .await
        .map_err(map_service_error)?;

    if deleted {
        Ok(no_content_response())
    } else {
        Err(not_found(id))
    }
}

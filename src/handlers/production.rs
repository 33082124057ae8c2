use super::common::{map_service_error, success_response};
use crate::{errors::ApiError, handlers::AppState, services::production::ProductionSuggestion};
use axum::{extract::State, response::IntoResponse, routing::get, Router};

/// Creates the router for production planning endpoints
pub fn production_routes() -> Router<AppState> {
    Router::new().route("/suggested", get(suggested_production))
}

/// Suggest what to manufacture from current stock
///
/// Each product whose requirements current stock can satisfy at least once
/// is listed with the number of whole units that can be made, ordered by
/// total value, highest first.
#[utoipa::path(
    get,
    path = "/production/suggested",
    responses(
        (status = 200, description = "Suggestions ordered by total value descending", body = [ProductionSuggestion],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "production"
)]
pub async fn suggested_production(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let suggestions = state
        .services
        .production
        .suggested_production()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(suggestions))
}

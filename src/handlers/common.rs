use crate::errors::{ApiError, ServiceError};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// JSON request body whose parse failures are reported as 400 `ErrorResponse`s
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| JsonBody(value))
            .map_err(|rejection: JsonRejection| {
                ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            })
    }
}

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Ids are assigned by the store; a create request must not carry one.
pub fn reject_client_id(id: Option<i32>, message: &str) -> Result<(), ApiError> {
    match id {
        Some(_) => Err(ApiError::BadRequest(message.to_string())),
        None => Ok(()),
    }
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn validate_input_reports_field_errors() {
        let err = validate_input(&Named { name: String::new() }).unwrap_err();
        match err {
            ApiError::ValidationError(msg) => assert!(msg.contains("name")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(validate_input(&Named { name: "ok".into() }).is_ok());
    }

    #[test]
    fn client_supplied_id_is_rejected() {
        assert!(reject_client_id(None, "ID must be null for creation").is_ok());
        assert!(matches!(
            reject_client_id(Some(4), "ID must be null for creation"),
            Err(ApiError::BadRequest(msg)) if msg == "ID must be null for creation"
        ));
    }
}

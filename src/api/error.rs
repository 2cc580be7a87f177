//! HTTP mapping for product errors.

use crate::model::ValidationErrors;
use crate::product_actor::ProductError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

/// A handler failure, rendered as a status code plus [`ErrorBody`].
#[derive(Debug)]
pub enum ApiError {
    Product(ProductError),
    /// A path ID that no product can have, such as a negative one.
    UnknownId(i64),
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        Self::Product(e)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Product(ProductError::Validation(e))
    }
}

fn not_found() -> ErrorBody {
    ErrorBody {
        detail: "Product not found".to_string(),
        errors: None,
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Product(ProductError::NotFound(_)) | ApiError::UnknownId(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Product(ProductError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Product(ProductError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::Product(ProductError::NotFound(_)) | ApiError::UnknownId(_) => not_found(),
            ApiError::Product(ProductError::Validation(errors)) => ErrorBody {
                detail: errors.to_string(),
                errors: Some(errors.clone()),
            },
            ApiError::Product(other) => ErrorBody {
                detail: other.to_string(),
                errors: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_not_found_body_hides_id() {
        let err = ApiError::from(ProductError::NotFound(ProductId(7)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::to_value(err.body()).unwrap(),
            serde_json::json!({"detail": "Product not found"})
        );
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let err = ApiError::from(ValidationErrors::single(
            "price",
            "must be greater than or equal to 0",
        ));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            serde_json::to_value(err.body()).unwrap(),
            serde_json::json!({
                "detail": "Validation failed: price must be greater than or equal to 0",
                "errors": [{"field": "price", "message": "must be greater than or equal to 0"}]
            })
        );
    }

    #[test]
    fn test_negative_id_reads_as_not_found() {
        let err = ApiError::UnknownId(-1);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let missing = ApiError::from(ProductError::NotFound(ProductId(1)));
        assert_eq!(err.body(), missing.body());
    }

    #[test]
    fn test_actor_failure_is_server_error() {
        let err = ApiError::from(ProductError::from("Actor closed".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().detail, "Actor communication error: Actor closed");
    }
}

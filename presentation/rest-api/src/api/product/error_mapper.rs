use poem::http::StatusCode;
use poem_openapi::payload::Json;
use tracing::error;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorEnvelope, IntoErrorResponse};
use crate::config::environment::AppEnvironment;

impl IntoErrorResponse for ProductError {
    fn into_error_response(self, environment: AppEnvironment) -> (StatusCode, Json<ErrorEnvelope>) {
        let (status, envelope) = match self {
            ProductError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::with_errors("Validation failed", errors),
            ),
            ProductError::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("Invalid product ID"),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorEnvelope::new("Product not found"),
            ),
            ProductError::Repository(err) => {
                error!(error = %err, "Product store operation failed");
                let detail = err.detail().unwrap_or("repository.persistence");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::internal(detail, environment),
                )
            }
        };

        (status, Json(envelope))
    }
}

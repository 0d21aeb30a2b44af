use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use tracing::error;

use crate::config::environment::AppEnvironment;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const HIDDEN_ERROR_DETAIL: &str = "Something went wrong";

/// Failure half of the response envelope: `success` is always `false`.
#[derive(Object, Debug, Clone)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    /// Itemized validation failures
    #[oai(skip_serializing_if_is_none)]
    pub errors: Option<Vec<String>>,
    /// Diagnostic detail for server-side failures
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            errors: None,
            error: None,
        }
    }

    pub fn with_errors(message: &str, errors: Vec<String>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::new(message)
        }
    }

    pub fn with_detail(message: &str, detail: String) -> Self {
        Self {
            error: Some(detail),
            ..Self::new(message)
        }
    }

    /// 500 body; the detail only leaves the process in development mode.
    pub fn internal(detail: &str, environment: AppEnvironment) -> Self {
        let detail = if environment.exposes_error_details() {
            detail
        } else {
            HIDDEN_ERROR_DETAIL
        };
        Self::with_detail(INTERNAL_ERROR_MESSAGE, detail.to_string())
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self, environment: AppEnvironment) -> (StatusCode, Json<ErrorEnvelope>);
}

/// Last-resort mapping for errors no operation handled: unknown routes,
/// unparseable bodies and anything unexpected.
pub fn error_response(err: poem::Error, environment: AppEnvironment) -> Response {
    let status = err.status();
    let (status, envelope) = match status {
        StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => {
            (StatusCode::NOT_FOUND, ErrorEnvelope::new("Route not found"))
        }
        status if status.is_client_error() => (
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::with_detail("Invalid request body", err.to_string()),
        ),
        _ => {
            error!(error = %err, "Global error handler");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorEnvelope::internal(&err.to_string(), environment),
            )
        }
    };

    Json(envelope).with_status(status).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hide_detail_in_production() {
        let envelope = ErrorEnvelope::internal("relation \"products\" does not exist", AppEnvironment::Production);

        assert_eq!(envelope.message, "Internal server error");
        assert_eq!(envelope.error.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn should_expose_detail_in_development() {
        let envelope = ErrorEnvelope::internal("connection reset", AppEnvironment::Development);

        assert_eq!(envelope.error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn should_map_unknown_route_to_not_found_envelope() {
        let response = error_response(
            poem::Error::from_status(StatusCode::NOT_FOUND),
            AppEnvironment::Production,
        );

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_answer_unsupported_media_type_as_bad_request() {
        let response = error_response(
            poem::Error::from_status(StatusCode::UNSUPPORTED_MEDIA_TYPE),
            AppEnvironment::Production,
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_unexpected_errors_to_internal_error() {
        let response = error_response(
            poem::Error::from_string("boom", StatusCode::BAD_GATEWAY),
            AppEnvironment::Production,
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

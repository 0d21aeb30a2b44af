use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    pub success: bool,
    pub message: String,
    /// Current server timestamp (RFC 3339)
    pub timestamp: String,
}

pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports that the service is up. Does not touch the database.
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            success: true,
            message: "Product CRUD API is running".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

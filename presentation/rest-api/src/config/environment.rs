use std::env;

/// Deployment mode, read from `APP_ENV` (falling back to `NODE_ENV`).
///
/// Only `development` exposes store error details in responses; anything
/// else, including an unset variable, is treated as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    pub fn from_env() -> Self {
        let value = env::var("APP_ENV").or_else(|_| env::var("NODE_ENV")).ok();
        Self::parse(value.as_deref())
    }

    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "development" || v == "dev" => AppEnvironment::Development,
            _ => AppEnvironment::Production,
        }
    }

    pub fn exposes_error_details(&self) -> bool {
        *self == AppEnvironment::Development
    }
}

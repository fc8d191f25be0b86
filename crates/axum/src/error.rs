//! Adapter errors, including template and serialization failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inertia_core::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InertiaError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to render template {name}: {reason}")]
    Template { name: String, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for InertiaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InertiaError>;

/// Client-facing message for an error. Internal details stay in the logs.
pub fn sanitize_error(error: &InertiaError) -> String {
    match error {
        InertiaError::Configuration(_) => "Internal configuration error".to_string(),
        InertiaError::Template { .. } => "Render failed".to_string(),
        InertiaError::Serialization(_) => "Could not serialize page".to_string(),
    }
}

impl IntoResponse for InertiaError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Inertia render failed");

        (StatusCode::INTERNAL_SERVER_ERROR, sanitize_error(&self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_is_500() {
        let response = InertiaError::from(ConfigurationError::MissingTemplate).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_sanitize_hides_details() {
        let error = InertiaError::Template {
            name: "app.html".to_string(),
            reason: "missing field `secret`".to_string(),
        };
        assert_eq!(sanitize_error(&error), "Render failed");
        assert!(error.to_string().contains("secret"));
    }
}

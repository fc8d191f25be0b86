use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inertia_axum::InertiaError;
use thiserror::Error;

/// A record the request asked for does not exist.
#[derive(Debug, Error)]
#[error("User {0} not found")]
pub struct UserNotFound(pub u64);

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on functions that return `Result<_, anyhow::Error>`
/// to automatically convert them into `Result<_, AppError>`.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = match self.0.downcast::<InertiaError>() {
            Ok(inertia_error) => return inertia_error.into_response(),
            Err(err) => err,
        };

        if err.downcast_ref::<UserNotFound>().is_some() {
            return (StatusCode::NOT_FOUND, err.to_string()).into_response();
        }

        tracing::error!(error = %err, "Application error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use inertia_axum::ConfigurationError;

    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::from(UserNotFound(7)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_inertia_error_maps_to_500() {
        let error = InertiaError::from(ConfigurationError::MissingTemplate);
        let response = AppError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Axum extractor for the request data the adapter needs.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{request::Parts, HeaderMap, Method, Uri},
};
use inertia_core::{InertiaMarkers, X_INERTIA, X_INERTIA_VERSION};

/// Request-scoped data handed to the negotiator and to shared-prop producers.
#[derive(Debug, Clone)]
pub struct InertiaRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub markers: InertiaMarkers,
}

fn extract_markers(headers: &HeaderMap) -> InertiaMarkers {
    let version = headers
        .get(X_INERTIA_VERSION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    InertiaMarkers::new(headers.contains_key(X_INERTIA), version)
}

impl InertiaRequest {
    pub fn from_parts(parts: &Parts) -> Self {
        // Nested routers strip their prefix from `parts.uri`.
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.clone())
            .unwrap_or_else(|| parts.uri.clone());

        Self {
            method: parts.method.clone(),
            uri,
            headers: parts.headers.clone(),
            markers: extract_markers(&parts.headers),
        }
    }

    /// Path echoed back in the page object.
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn is_inertia(&self) -> bool {
        self.markers.is_inertia
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<S> FromRequestParts<S> for InertiaRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(builder: axum::http::request::Builder) -> Parts {
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_plain_request_has_no_markers() {
        let request = InertiaRequest::from_parts(&parts(Request::builder().uri("/users")));

        assert!(!request.is_inertia());
        assert_eq!(request.markers.version, None);
        assert_eq!(request.path(), "/users");
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let request = InertiaRequest::from_parts(&parts(
            Request::builder()
                .uri("/users/1?tab=posts")
                .header("X-Inertia", "true")
                .header("X-INERTIA-VERSION", "abc123"),
        ));

        assert!(request.is_inertia());
        assert_eq!(request.markers.version.as_deref(), Some("abc123"));
        assert_eq!(request.path(), "/users/1");
    }

    #[test]
    fn test_marker_presence_is_enough() {
        let request = InertiaRequest::from_parts(&parts(
            Request::builder().uri("/").header("x-inertia", "false"),
        ));
        assert!(request.is_inertia());
    }

    #[test]
    fn test_original_uri_wins() {
        let mut parts = parts(Request::builder().uri("/1"));
        parts
            .extensions
            .insert(OriginalUri("/users/1".parse().unwrap()));

        let request = InertiaRequest::from_parts(&parts);
        assert_eq!(request.path(), "/users/1");
    }

    #[test]
    fn test_header_lookup() {
        let request = InertiaRequest::from_parts(&parts(
            Request::builder().uri("/").header("x-request-id", "req-1"),
        ));
        assert_eq!(request.header("x-request-id"), Some("req-1"));
        assert_eq!(request.header("x-missing"), None);
    }
}

//! Pure decision between a full-page and a partial response.

/// Marks a client-side navigation request and a partial response.
pub const X_INERTIA: &str = "x-inertia";

/// Carries the asset version the client last saw.
pub const X_INERTIA_VERSION: &str = "x-inertia-version";

/// The Inertia headers found on a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InertiaMarkers {
    /// `X-Inertia` was present, whatever its value.
    pub is_inertia: bool,
    /// Value of `X-Inertia-Version`, if any.
    pub version: Option<String>,
}

impl InertiaMarkers {
    pub fn new(is_inertia: bool, version: Option<String>) -> Self {
        Self {
            is_inertia,
            version,
        }
    }
}

/// Shape of the response to send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// HTML shell rendered from the template.
    FullPage,
    /// JSON page object.
    Partial,
}

/// Picks the response shape.
///
/// A partial response requires the Inertia marker and a version equal, as
/// strings, to the current one. A stale or missing version yields a full
/// page, which makes the client reload its assets.
pub fn negotiate(markers: &InertiaMarkers, current_version: &str) -> ResponseKind {
    match markers.version.as_deref() {
        Some(version) if markers.is_inertia && version == current_version => ResponseKind::Partial,
        _ => ResponseKind::FullPage,
    }
}

//! Inertia protocol adapter for axum - imperative shell.
//!
//! This crate wires the pure logic of `inertia_core` into axum: it extracts
//! the Inertia headers from requests, evaluates shared props, renders the
//! full-page template with askama and shapes the partial JSON response.
//!
//! # Example
//!
//! ```no_run
//! use axum::{response::Response, routing::get, Router};
//! use inertia_axum::{Inertia, InertiaConfig, InertiaError, InertiaRequest};
//!
//! async fn home(request: InertiaRequest) -> Result<Response, InertiaError> {
//!     let inertia = Inertia::new(InertiaConfig::new().with_default_template("app.html"));
//!     inertia.render(&request, "Home", None, None)
//! }
//!
//! let app: Router = Router::new().route("/", get(home));
//! ```

mod config;
mod error;
mod render;
mod request;
mod shared;
mod template;
mod view;

// Re-export core types for convenience
pub use inertia_core::{
    AssetVersion, ConfigurationError, InertiaPage, ObjectSerializer, PageContext, Props,
    SerdeSerializer, VersionHolder, ViewData,
};

pub use config::InertiaConfig;
pub use error::{sanitize_error, InertiaError, Result};
pub use render::Inertia;
pub use request::InertiaRequest;
pub use shared::SharedProps;
pub use template::{AppShell, RenderError, TemplateRegistry, TemplateRenderer, DEFAULT_TEMPLATE};
pub use view::InertiaView;

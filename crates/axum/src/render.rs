//! Response negotiation: full HTML page or partial JSON page object.

use std::sync::Arc;

use axum::{
    http::{header::VARY, HeaderName, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use inertia_core::{
    negotiate, props, resolve_template, ConfigurationError, InertiaPage, Props, ResponseKind,
    X_INERTIA,
};

use crate::{config::InertiaConfig, error::Result, request::InertiaRequest};

/// Renders Inertia pages. Cheap to clone; keep one in the application state.
#[derive(Clone, Debug)]
pub struct Inertia {
    config: Arc<InertiaConfig>,
}

impl Inertia {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &InertiaConfig {
        &self.config
    }

    /// Current asset version.
    pub fn version(&self) -> String {
        self.config.version.get()
    }

    /// Builds the page object for a request.
    ///
    /// Shared props land under `shared`, replacing any caller-supplied value.
    pub fn page(
        &self,
        request: &InertiaRequest,
        component: &str,
        props: Option<Props>,
    ) -> InertiaPage {
        let props = props::normalize(props);
        let props = props::insert_csrf_token(props, self.config.csrf_token(request));
        let props = props::merge_shared(props, self.config.shared.resolve(request));

        InertiaPage::new(component, props, self.version(), request.path())
    }

    /// Renders `component` with `props`.
    ///
    /// Answers with the JSON page object when the client sent `X-Inertia`
    /// and a current `X-Inertia-Version`, and with the full HTML page
    /// otherwise. Fails when no registered template can be resolved, even
    /// if the response would have been partial.
    pub fn render(
        &self,
        request: &InertiaRequest,
        component: &str,
        props: Option<Props>,
        template: Option<&str>,
    ) -> Result<Response> {
        let template = resolve_template(template, self.config.default_template.as_deref())?;
        if !self.config.templates.contains(template) {
            tracing::warn!(template, "Template not registered");
            return Err(ConfigurationError::UnknownTemplate(template.to_string()).into());
        }
        let page = self.page(request, component, props);
        let kind = negotiate(&request.markers, &page.version);

        tracing::debug!(
            component = %page.component,
            url = %page.url,
            version = %page.version,
            ?kind,
            "Negotiated Inertia response"
        );

        match kind {
            ResponseKind::Partial => Ok(partial_response(page)),
            ResponseKind::FullPage => {
                let html = self.config.templates.render(template, &page.to_context())?;
                Ok(Html(html).into_response())
            }
        }
    }
}

fn partial_response(page: InertiaPage) -> Response {
    (
        [
            (
                HeaderName::from_static(X_INERTIA),
                HeaderValue::from_static("true"),
            ),
            (VARY, HeaderValue::from_static("Accept")),
        ],
        Json(page),
    )
        .into_response()
}

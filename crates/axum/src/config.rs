//! Adapter configuration, set once when the host builds its router.

use std::{fmt, sync::Arc};

use inertia_core::{AssetVersion, VersionHolder};
use serde_json::Value;

use crate::{
    request::InertiaRequest,
    shared::SharedProps,
    template::{TemplateRegistry, TemplateRenderer},
};

type CsrfFn = Arc<dyn Fn(&InertiaRequest) -> Option<String> + Send + Sync>;

/// Configuration for the negotiator.
#[derive(Clone)]
pub struct InertiaConfig {
    /// Template used when a render call does not name one.
    pub default_template: Option<String>,
    /// Props merged into every page under `shared`.
    pub shared: SharedProps,
    /// Templates available to full-page responses.
    pub templates: TemplateRegistry,
    /// Source of the asset version (the process-wide holder by default).
    pub version: Arc<VersionHolder>,
    csrf_token: Option<CsrfFn>,
}

impl InertiaConfig {
    pub fn new() -> Self {
        Self {
            default_template: None,
            shared: SharedProps::new(),
            templates: TemplateRegistry::default(),
            version: VersionHolder::global(),
            csrf_token: None,
        }
    }

    pub fn with_default_template(mut self, name: impl Into<String>) -> Self {
        self.default_template = Some(name.into());
        self
    }

    /// Shares a static value with every page.
    pub fn share(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.shared.insert(key, value);
        self
    }

    /// Shares a value computed per request with every page.
    pub fn share_with<F, V>(mut self, key: impl Into<String>, producer: F) -> Self
    where
        F: Fn(&InertiaRequest) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.shared.insert_with(key, producer);
        self
    }

    pub fn with_template(
        mut self,
        name: impl Into<String>,
        renderer: impl TemplateRenderer + 'static,
    ) -> Self {
        self.templates.register(name, renderer);
        self
    }

    /// Reads the version from `holder` instead of the process-wide one.
    pub fn with_version_holder(mut self, holder: Arc<VersionHolder>) -> Self {
        self.version = holder;
        self
    }

    /// Stores `version` in the configured holder.
    pub fn with_version(self, version: impl Into<AssetVersion>) -> Self {
        self.version.set(version);
        self
    }

    /// Adds `csrf_token` to the props of every page when the provider
    /// returns a token.
    pub fn with_csrf_token<F>(mut self, provider: F) -> Self
    where
        F: Fn(&InertiaRequest) -> Option<String> + Send + Sync + 'static,
    {
        self.csrf_token = Some(Arc::new(provider));
        self
    }

    pub(crate) fn csrf_token(&self, request: &InertiaRequest) -> Option<String> {
        self.csrf_token.as_ref().and_then(|provider| provider(request))
    }
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InertiaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InertiaConfig")
            .field("default_template", &self.default_template)
            .field("shared", &self.shared)
            .field("templates", &self.templates)
            .field("version", &self.version)
            .field("csrf_token", &self.csrf_token.is_some())
            .finish()
    }
}

//! Full-page templates.
//!
//! Templates are looked up by name in a [`TemplateRegistry`]. The registry
//! ships with [`AppShell`], an askama template registered as `app.html` that
//! embeds the page object in `<div id="app" data-page="...">`.

use std::{collections::HashMap, fmt, sync::Arc};

use askama::Template;
use inertia_core::{ConfigurationError, PageContext};

use crate::error::{InertiaError, Result};

/// Name the built-in shell is registered under.
pub const DEFAULT_TEMPLATE: &str = "app.html";

pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// Renders the HTML document for a full-page response.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, context: &PageContext) -> std::result::Result<String, RenderError>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&PageContext) -> std::result::Result<String, RenderError> + Send + Sync,
{
    fn render(&self, context: &PageContext) -> std::result::Result<String, RenderError> {
        self(context)
    }
}

/// HTML shell the client-side app boots from.
#[derive(Template)]
#[template(path = "app.html")]
struct AppTemplate<'a> {
    title: &'a str,
    script: &'a str,
    page_json: String,
}

/// The built-in askama shell.
#[derive(Clone, Debug)]
pub struct AppShell {
    title: String,
    script: String,
}

impl AppShell {
    pub fn new(title: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            script: script.into(),
        }
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new("Inertia", "/dist/app.js")
    }
}

impl TemplateRenderer for AppShell {
    fn render(&self, context: &PageContext) -> std::result::Result<String, RenderError> {
        let template = AppTemplate {
            title: &self.title,
            script: &self.script,
            page_json: context.page_json()?,
        };
        Ok(template.render()?)
    }
}

/// Templates available to full-page responses, by name.
#[derive(Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn TemplateRenderer>>,
}

impl TemplateRegistry {
    /// A registry without any template, not even the built-in shell.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, renderer: impl TemplateRenderer + 'static) {
        self.templates.insert(name.into(), Arc::new(renderer));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Renders the named template.
    pub fn render(&self, name: &str, context: &PageContext) -> Result<String> {
        let Some(renderer) = self.templates.get(name) else {
            tracing::warn!(template = name, "Template not registered");
            return Err(ConfigurationError::UnknownTemplate(name.to_string()).into());
        };

        renderer
            .render(context)
            .map_err(|e| InertiaError::Template {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_TEMPLATE, AppShell::default());
        registry
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.templates.keys()).finish()
    }
}

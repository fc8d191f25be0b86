//! Page objects exchanged with the client.

use serde::Serialize;

use crate::props::Props;

/// The page object sent as the body of a partial response.
///
/// Field order is part of the wire format.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InertiaPage {
    pub component: String,
    pub props: Props,
    pub version: String,
    pub url: String,
}

impl InertiaPage {
    pub fn new(
        component: impl Into<String>,
        props: Props,
        version: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            props,
            version: version.into(),
            url: url.into(),
        }
    }

    /// Context handed to the full-page template.
    pub fn to_context(&self) -> PageContext {
        PageContext {
            page: PageView {
                version: self.version.clone(),
                component: self.component.clone(),
                props: self.props.clone(),
            },
        }
    }
}

/// What the client bootstrap script reads on the first visit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageView {
    pub version: String,
    pub component: String,
    pub props: Props,
}

/// Template context: `{"page": {"version", "component", "props"}}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageContext {
    pub page: PageView,
}

impl PageContext {
    /// The page as JSON text for embedding in HTML.
    pub fn page_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.page)
    }
}

//! Generic view for pages displaying one object or a collection.

use std::{fmt, sync::Arc};

use axum::response::Response;
use inertia_core::{
    view::{object_name, view_props},
    ConfigurationError, ObjectSerializer, Props, ViewData,
};

use crate::{error::Result, render::Inertia, request::InertiaRequest};

/// Renders a component with a serialized object (or list) as props.
///
/// The data is stored under the context object name, or under the
/// serializer's model name (`<model>_list` for collections), merged into the
/// view's preset props.
pub struct InertiaView<T> {
    name: String,
    component: String,
    props: Option<Props>,
    template: Option<String>,
    context_object_name: Option<String>,
    serializer: Option<Arc<dyn ObjectSerializer<T>>>,
}

impl<T> InertiaView<T> {
    /// `name` identifies the view in configuration errors.
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: component.into(),
            props: None,
            template: None,
            context_object_name: None,
            serializer: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_context_object_name(mut self, name: impl Into<String>) -> Self {
        self.context_object_name = Some(name.into());
        self
    }

    pub fn with_serializer(mut self, serializer: impl ObjectSerializer<T> + 'static) -> Self {
        self.serializer = Some(Arc::new(serializer));
        self
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Props for `data`: preset props plus the serialized data.
    pub fn props_for(&self, data: &ViewData<'_, T>) -> Result<Props> {
        let serializer = self
            .serializer
            .as_deref()
            .ok_or_else(|| ConfigurationError::MissingSerializer {
                view: self.name.clone(),
            })?;

        let key = object_name(
            serializer.model_name(),
            self.context_object_name.as_deref(),
            data.is_many(),
        );
        let value = data.serialize(serializer)?;

        Ok(view_props(self.props.as_ref(), key, value))
    }

    pub fn render(
        &self,
        inertia: &Inertia,
        request: &InertiaRequest,
        data: ViewData<'_, T>,
    ) -> Result<Response> {
        let props = self.props_for(&data)?;
        inertia.render(
            request,
            &self.component,
            Some(props),
            self.template.as_deref(),
        )
    }

    /// Detail page for a single object.
    pub fn render_one(
        &self,
        inertia: &Inertia,
        request: &InertiaRequest,
        object: &T,
    ) -> Result<Response> {
        self.render(inertia, request, ViewData::One(object))
    }

    /// List page for a collection.
    pub fn render_many(
        &self,
        inertia: &Inertia,
        request: &InertiaRequest,
        objects: &[T],
    ) -> Result<Response> {
        self.render(inertia, request, ViewData::Many(objects))
    }
}

impl<T> fmt::Debug for InertiaView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InertiaView")
            .field("name", &self.name)
            .field("component", &self.component)
            .field("template", &self.template)
            .field("context_object_name", &self.context_object_name)
            .field("serializer", &self.serializer.is_some())
            .finish()
    }
}

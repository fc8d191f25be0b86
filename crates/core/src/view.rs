//! Prop building for views that display one object or a collection.

use serde::Serialize;
use serde_json::Value;

use crate::props::Props;

/// Turns domain objects into JSON props.
pub trait ObjectSerializer<T>: Send + Sync {
    /// Lowercase model name used to derive the props key (e.g. `"user"`).
    fn model_name(&self) -> &str;

    fn serialize_one(&self, object: &T) -> serde_json::Result<Value>;

    fn serialize_many(&self, objects: &[T]) -> serde_json::Result<Value> {
        objects
            .iter()
            .map(|object| self.serialize_one(object))
            .collect::<serde_json::Result<Vec<_>>>()
            .map(Value::Array)
    }
}

/// Serializer backed by the object's `Serialize` implementation.
#[derive(Clone, Debug)]
pub struct SerdeSerializer {
    model_name: String,
}

impl SerdeSerializer {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }
}

impl<T: Serialize> ObjectSerializer<T> for SerdeSerializer {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn serialize_one(&self, object: &T) -> serde_json::Result<Value> {
        serde_json::to_value(object)
    }
}

/// The data a view displays.
#[derive(Debug)]
pub enum ViewData<'a, T> {
    One(&'a T),
    Many(&'a [T]),
}

impl<T> ViewData<'_, T> {
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    pub fn serialize(&self, serializer: &dyn ObjectSerializer<T>) -> serde_json::Result<Value> {
        match self {
            Self::One(object) => serializer.serialize_one(object),
            Self::Many(objects) => serializer.serialize_many(objects),
        }
    }
}

/// Props key for the displayed data.
///
/// An explicit name wins. Otherwise a single object is keyed by its model
/// name and a collection by `<model>_list`.
pub fn object_name(model_name: &str, context_object_name: Option<&str>, many: bool) -> String {
    match context_object_name {
        Some(name) => name.to_string(),
        None if many => format!("{model_name}_list"),
        None => model_name.to_string(),
    }
}

/// Merges the serialized data into the view's preset props.
pub fn view_props(preset: Option<&Props>, object_name: String, data: Value) -> Props {
    let mut props = preset.cloned().unwrap_or_default();
    props.insert(object_name, data);
    props
}

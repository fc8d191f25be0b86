//! Props merged into every page under the reserved `shared` key.

use std::{collections::BTreeMap, fmt, sync::Arc};

use inertia_core::Props;
use serde_json::Value;

use crate::request::InertiaRequest;

type SharedFn = Arc<dyn Fn(&InertiaRequest) -> Value + Send + Sync>;

/// Registry of shared props.
///
/// Every entry is a producer evaluated once per request. Static values are
/// stored as producers returning a clone of the value.
#[derive(Clone, Default)]
pub struct SharedProps {
    entries: BTreeMap<String, SharedFn>,
}

impl SharedProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares a static value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        self.entries
            .insert(key.into(), Arc::new(move |_: &InertiaRequest| value.clone()));
    }

    /// Shares a value computed from the current request.
    pub fn insert_with<F, V>(&mut self, key: impl Into<String>, producer: F)
    where
        F: Fn(&InertiaRequest) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.entries.insert(
            key.into(),
            Arc::new(move |request: &InertiaRequest| producer(request).into()),
        );
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates every entry against the request.
    pub fn resolve(&self, request: &InertiaRequest) -> Props {
        self.entries
            .iter()
            .map(|(key, producer)| (key.clone(), producer(request)))
            .collect()
    }
}

impl fmt::Debug for SharedProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

//! Asset version shared between the server and the client.
//!
//! The client echoes the last version it saw in `X-Inertia-Version`. When it
//! no longer matches, the server answers with a full page so the browser
//! reloads the new assets.

use std::fmt;
use std::sync::{Arc, LazyLock, RwLock};

type VersionFn = Arc<dyn Fn() -> String + Send + Sync>;

/// A fixed asset version or a producer evaluated on every read.
#[derive(Clone)]
pub enum AssetVersion {
    Static(String),
    Computed(VersionFn),
}

impl AssetVersion {
    /// Wraps a producer. Its result is coerced to a string on each read.
    pub fn computed<F, V>(producer: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: ToString,
    {
        Self::Computed(Arc::new(move || producer().to_string()))
    }

    /// Resolves the version to its string form.
    pub fn resolve(&self) -> String {
        match self {
            Self::Static(version) => version.clone(),
            Self::Computed(producer) => producer(),
        }
    }
}

impl fmt::Debug for AssetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(version) => f.debug_tuple("Static").field(version).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for AssetVersion {
    fn from(version: &str) -> Self {
        Self::Static(version.to_string())
    }
}

impl From<String> for AssetVersion {
    fn from(version: String) -> Self {
        Self::Static(version)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AssetVersion {
                fn from(version: $ty) -> Self {
                    Self::Static(version.to_string())
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

static GLOBAL: LazyLock<Arc<VersionHolder>> = LazyLock::new(|| Arc::new(VersionHolder::new()));

/// Slot holding the current [`AssetVersion`].
///
/// Writes are expected once at startup. Reads never cache a computed value.
#[derive(Debug, Default)]
pub struct VersionHolder {
    slot: RwLock<Option<AssetVersion>>,
}

impl VersionHolder {
    /// Creates an empty holder.
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// The process-wide holder.
    pub fn global() -> Arc<VersionHolder> {
        Arc::clone(&GLOBAL)
    }

    /// Stores a version, replacing any previous one.
    pub fn set(&self, version: impl Into<AssetVersion>) {
        let version = version.into();
        tracing::debug!(version = ?version, "Asset version set");
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(version);
    }

    /// Returns the slot to its unset state.
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn is_set(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Current version as a string; empty when nothing was set.
    pub fn get(&self) -> String {
        // Clone out of the lock so a producer never runs while it is held.
        let version = self.slot.read().unwrap_or_else(|e| e.into_inner()).clone();

        let resolved = version.map(|v| v.resolve()).unwrap_or_default();
        tracing::trace!(version = %resolved, "Asset version read");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_get_without_value_is_empty() {
        let holder = VersionHolder::new();
        assert!(!holder.is_set());
        assert_eq!(holder.get(), "");
    }

    #[test]
    fn test_static_version() {
        let holder = VersionHolder::new();
        holder.set("abc123");
        assert!(holder.is_set());
        assert_eq!(holder.get(), "abc123");
    }

    #[test]
    fn test_numeric_version_is_coerced() {
        let holder = VersionHolder::new();
        holder.set(42u64);
        assert_eq!(holder.get(), "42");
    }

    #[test]
    fn test_every_numeric_type_is_coerced() {
        let holder = VersionHolder::new();

        holder.set(7u8);
        assert_eq!(holder.get(), "7");
        holder.set(-3i16);
        assert_eq!(holder.get(), "-3");
        holder.set(1.5f64);
        assert_eq!(holder.get(), "1.5");
        holder.set(2.25f32);
        assert_eq!(holder.get(), "2.25");
    }

    #[test]
    fn test_last_write_wins() {
        let holder = VersionHolder::new();
        holder.set("v1");
        holder.set("v2");
        assert_eq!(holder.get(), "v2");
    }

    #[test]
    fn test_clear() {
        let holder = VersionHolder::new();
        holder.set("v1");
        holder.clear();
        assert!(!holder.is_set());
        assert_eq!(holder.get(), "");
    }

    #[test]
    fn test_computed_version() {
        let holder = VersionHolder::new();
        holder.set(AssetVersion::computed(|| "v2"));
        assert_eq!(holder.get(), "v2");
        assert_eq!(holder.get(), "v2");
    }

    #[test]
    fn test_computed_version_is_not_cached() {
        let counter = Arc::new(AtomicU32::new(0));
        let producer = Arc::clone(&counter);

        let holder = VersionHolder::new();
        holder.set(AssetVersion::computed(move || {
            producer.fetch_add(1, Ordering::SeqCst) + 1
        }));

        assert_eq!(holder.get(), "1");
        assert_eq!(holder.get(), "2");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&VersionHolder::global(), &VersionHolder::global()));
    }

    #[test]
    fn test_debug_hides_producer() {
        assert_eq!(
            format!("{:?}", AssetVersion::computed(|| "x")),
            "Computed(..)"
        );
        assert_eq!(
            format!("{:?}", AssetVersion::from("x")),
            "Static(\"x\")"
        );
    }
}

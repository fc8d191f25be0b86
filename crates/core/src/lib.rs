//! Pure Inertia protocol logic - no I/O, no async.
//!
//! This crate provides:
//! - The asset version holder compared against `X-Inertia-Version`
//! - Page objects for partial responses and full-page template contexts
//! - The full-page vs partial decision
//! - Prop building for single-object and collection views
//!
//! # Example
//!
//! ```
//! use inertia_core::{negotiate, InertiaMarkers, ResponseKind, VersionHolder};
//!
//! let holder = VersionHolder::new();
//! holder.set("abc123");
//!
//! let markers = InertiaMarkers::new(true, Some("abc123".to_string()));
//! assert_eq!(negotiate(&markers, &holder.get()), ResponseKind::Partial);
//!
//! let stale = InertiaMarkers::new(true, Some("stale".to_string()));
//! assert_eq!(negotiate(&stale, &holder.get()), ResponseKind::FullPage);
//! ```

mod error;
mod negotiate;
mod page;
pub mod props;
mod template;
mod version;
pub mod view;

pub use error::{ConfigurationError, Result};
pub use negotiate::{negotiate, InertiaMarkers, ResponseKind, X_INERTIA, X_INERTIA_VERSION};
pub use page::{InertiaPage, PageContext, PageView};
pub use props::Props;
pub use template::resolve_template;
pub use version::{AssetVersion, VersionHolder};
pub use view::{ObjectSerializer, SerdeSerializer, ViewData};

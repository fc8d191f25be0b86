use std::{
    env,
    path::{Path, PathBuf},
};

use inertia_axum::{AppShell, AssetVersion, InertiaConfig, InertiaRequest, DEFAULT_TEMPLATE};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Template for full-page responses (default: "app.html")
    pub template: String,
    /// Static asset version
    pub asset_version: Option<String>,
    /// JSON manifest whose `version` key is read on every request.
    /// Takes precedence over `asset_version`.
    pub asset_manifest: Option<PathBuf>,
    /// Application name shared with every page (default: "Inertia Demo")
    pub app_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INERTIA_TEMPLATE` - Full-page template name (default: "app.html")
    /// - `ASSET_VERSION` - Static asset version
    /// - `ASSET_MANIFEST` - Path to a JSON manifest with a `version` key
    /// - `APP_NAME` - Application name (default: "Inertia Demo")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            template: var("INERTIA_TEMPLATE").unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            asset_version: var("ASSET_VERSION"),
            asset_manifest: var("ASSET_MANIFEST").map(PathBuf::from),
            app_name: var("APP_NAME").unwrap_or_else(|| "Inertia Demo".to_string()),
        }
    }

    /// The asset version to install, if any.
    pub fn asset_version(&self) -> Option<AssetVersion> {
        if let Some(path) = &self.asset_manifest {
            let path = path.clone();
            return Some(AssetVersion::computed(move || read_manifest_version(&path)));
        }

        self.asset_version.clone().map(AssetVersion::from)
    }

    /// Adapter configuration. Installs the asset version in the process-wide
    /// holder.
    pub fn inertia_config(&self) -> InertiaConfig {
        let config = InertiaConfig::new()
            .with_default_template(&self.template)
            .with_template(DEFAULT_TEMPLATE, AppShell::new(&self.app_name, "/dist/app.js"))
            .share("app_name", self.app_name.clone())
            .share_with("request_id", |request: &InertiaRequest| {
                request.header("x-request-id").map(str::to_string)
            });

        match self.asset_version() {
            Some(version) => config.with_version(version),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Reads the `version` key of a JSON manifest. An unreadable manifest yields
/// an empty version, which no client will match.
fn read_manifest_version(path: &Path) -> String {
    let manifest = std::fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok());

    match manifest
        .as_ref()
        .and_then(|m| m.get("version"))
        .and_then(|v| v.as_str())
    {
        Some(version) => version.to_string(),
        None => {
            tracing::warn!(path = %path.display(), "Asset manifest has no readable version");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config(&[]);

        assert_eq!(config.template, "app.html");
        assert_eq!(config.asset_version, None);
        assert_eq!(config.asset_manifest, None);
        assert_eq!(config.app_name, "Inertia Demo");
        assert!(config.asset_version().is_none());
    }

    #[test]
    fn test_static_asset_version() {
        let config = config(&[("ASSET_VERSION", "abc123"), ("INERTIA_TEMPLATE", "base.html")]);

        assert_eq!(config.template, "base.html");
        assert_eq!(
            config.asset_version().map(|v| v.resolve()).as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_manifest_version_is_read_on_every_resolve() {
        let path =
            env::temp_dir().join(format!("inertia-demo-manifest-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"version": "v1"}"#).unwrap();

        let config = config(&[
            ("ASSET_VERSION", "ignored"),
            ("ASSET_MANIFEST", path.to_str().unwrap()),
        ]);
        let version = config.asset_version().unwrap();
        assert_eq!(version.resolve(), "v1");

        std::fs::write(&path, r#"{"version": "v2"}"#).unwrap();
        assert_eq!(version.resolve(), "v2");

        std::fs::remove_file(&path).unwrap();
        assert_eq!(version.resolve(), "");
    }
}

//! Configuration errors (pure - no I/O variants).

use thiserror::Error;

/// Startup misconfigurations detected while rendering.
///
/// None of these are per-request conditions: they mean the host wired the
/// adapter incorrectly and must surface as a server error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No Inertia template found: set a default template or pass one explicitly")]
    MissingTemplate,

    #[error("{view} is missing an object serializer")]
    MissingSerializer { view: String },

    #[error("Template not registered: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        assert_eq!(
            ConfigurationError::MissingSerializer {
                view: "UserDetail".to_string()
            }
            .to_string(),
            "UserDetail is missing an object serializer"
        );
        assert_eq!(
            ConfigurationError::UnknownTemplate("base.html".to_string()).to_string(),
            "Template not registered: base.html"
        );
    }
}

//! Template name resolution for full-page responses.

use crate::error::{ConfigurationError, Result};

/// Picks the template for a full-page response.
///
/// An explicit name wins over the configured default. Having neither is a
/// configuration error, never a silent fallback.
pub fn resolve_template<'a>(
    template_override: Option<&'a str>,
    default: Option<&'a str>,
) -> Result<&'a str> {
    template_override
        .or(default)
        .ok_or(ConfigurationError::MissingTemplate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_template(Some("other.html"), Some("app.html")),
            Ok("other.html")
        );
    }

    #[test]
    fn test_falls_back_to_default() {
        assert_eq!(resolve_template(None, Some("app.html")), Ok("app.html"));
    }

    #[test]
    fn test_missing_template() {
        assert_eq!(
            resolve_template(None, None),
            Err(ConfigurationError::MissingTemplate)
        );
    }
}

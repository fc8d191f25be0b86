//! Page props and the reserved keys the adapter writes into them.

use serde_json::{Map, Value};

/// Props of a page: a JSON object with unique keys.
pub type Props = Map<String, Value>;

/// Reserved key holding the shared props of every page.
pub const SHARED_KEY: &str = "shared";

/// Key holding the CSRF token when a token provider is configured.
pub const CSRF_TOKEN_KEY: &str = "csrf_token";

/// Absent props become an empty object.
pub fn normalize(props: Option<Props>) -> Props {
    props.unwrap_or_default()
}

/// Inserts the resolved shared props, replacing any caller-supplied
/// `shared` entry.
pub fn merge_shared(mut props: Props, shared: Props) -> Props {
    props.insert(SHARED_KEY.to_string(), Value::Object(shared));
    props
}

/// Adds the CSRF token when there is one.
pub fn insert_csrf_token(mut props: Props, token: Option<String>) -> Props {
    if let Some(token) = token {
        props.insert(CSRF_TOKEN_KEY.to_string(), Value::String(token));
    }
    props
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Props {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_normalize_absent() {
        assert!(normalize(None).is_empty());
    }

    #[test]
    fn test_merge_shared_into_empty() {
        let props = merge_shared(Props::new(), Props::new());
        assert_eq!(Value::Object(props), json!({"shared": {}}));
    }

    #[test]
    fn test_merge_shared_keeps_caller_props() {
        let props = merge_shared(object(json!({"id": 1})), object(json!({"app": "demo"})));
        assert_eq!(
            Value::Object(props),
            json!({"id": 1, "shared": {"app": "demo"}})
        );
    }

    #[test]
    fn test_merge_shared_overwrites_caller_shared() {
        let props = merge_shared(
            object(json!({"shared": {"spoofed": true}})),
            object(json!({"app": "demo"})),
        );
        assert_eq!(Value::Object(props), json!({"shared": {"app": "demo"}}));
    }

    #[test]
    fn test_insert_csrf_token() {
        let props = insert_csrf_token(Props::new(), Some("tok".to_string()));
        assert_eq!(props[CSRF_TOKEN_KEY], "tok");

        let props = insert_csrf_token(Props::new(), None);
        assert!(!props.contains_key(CSRF_TOKEN_KEY));
    }
}

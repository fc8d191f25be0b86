use axum::{extract::State, response::Response};
use inertia_axum::{InertiaRequest, Props};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Handler for the home page (GET /).
pub async fn home(
    State(state): State<AppState>,
    request: InertiaRequest,
) -> Result<Response, AppError> {
    let mut props = Props::new();
    props.insert("user_count".to_string(), json!(state.list_users().len()));

    Ok(state.inertia.render(&request, "Home", Some(props), None)?)
}

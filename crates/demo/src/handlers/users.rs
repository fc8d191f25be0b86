//! User pages rendered through the generic Inertia view.

use axum::{
    extract::{Path, State},
    response::Response,
};
use inertia_axum::{InertiaRequest, InertiaView, SerdeSerializer};

use crate::{
    error::{AppError, UserNotFound},
    models::User,
    state::AppState,
};

fn user_list_view() -> InertiaView<User> {
    InertiaView::new("UserList", "Users/Index")
        .with_serializer(SerdeSerializer::new("user"))
        .with_context_object_name("users")
}

fn user_detail_view() -> InertiaView<User> {
    InertiaView::new("UserDetail", "Users/Show").with_serializer(SerdeSerializer::new("user"))
}

/// List all users (GET /users).
pub async fn list_users(
    State(state): State<AppState>,
    request: InertiaRequest,
) -> Result<Response, AppError> {
    let users = state.list_users();

    Ok(user_list_view().render_many(&state.inertia, &request, &users)?)
}

/// Show a single user (GET /users/{id}).
pub async fn show_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    request: InertiaRequest,
) -> Result<Response, AppError> {
    let user = state.get_user(id).ok_or(UserNotFound(id))?;

    tracing::debug!(user_id = id, "Rendering user");

    Ok(user_detail_view().render_one(&state.inertia, &request, &user)?)
}

//! Shared application state.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use inertia_axum::Inertia;

use crate::models::User;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Page renderer.
    pub inertia: Inertia,
    /// In-memory user store.
    pub users: Arc<RwLock<BTreeMap<u64, User>>>,
}

impl AppState {
    pub fn new(inertia: Inertia) -> Self {
        Self {
            inertia,
            users: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Creates a state seeded with demo users.
    pub fn with_demo_data(inertia: Inertia) -> Self {
        let state = Self::new(inertia);
        {
            let mut users = state.users.write().unwrap_or_else(|e| e.into_inner());
            for user in demo_users() {
                users.insert(user.id, user);
            }
        }
        state
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    pub fn get_user(&self, id: u64) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }
}

fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Ada Lovelace", "ada@example.com"),
        User::new(2, "Grace Hopper", "grace@example.com"),
        User::new(3, "Margaret Hamilton", "margaret@example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use inertia_axum::InertiaConfig;

    use super::*;

    #[test]
    fn test_demo_data() {
        let state = AppState::with_demo_data(Inertia::new(InertiaConfig::new()));

        assert_eq!(state.list_users().len(), 3);
        assert_eq!(state.get_user(1).map(|u| u.name).as_deref(), Some("Ada Lovelace"));
        assert!(state.get_user(42).is_none());
    }
}

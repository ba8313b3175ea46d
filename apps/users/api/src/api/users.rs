use axum::Router;
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService, handlers};

use crate::state::AppState;

/// Users routes backed by Postgres when a pool is configured, memory otherwise.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(UserService::new(PgUserRepository::new(db.clone()))),
        None => {
            tracing::warn!("USER_STORAGE=memory: users are lost on restart");
            handlers::router(UserService::new(InMemoryUserRepository::new()))
        }
    }
}

//! Application state management.
//!
//! Shared by the route builders and the readiness probe.

use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: `DatabaseConnection` is a pooled handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL pool; `None` when users are kept in memory
    pub db: Option<DatabaseConnection>,
}

/// Failures while setting up or probing the database.
///
/// Query errors inside repositories stay `sea_orm::DbErr`; this type covers
/// the pool lifecycle around them.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Still unreachable after every retry
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

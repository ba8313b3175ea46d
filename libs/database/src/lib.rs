//! PostgreSQL connectivity for the user service.
//!
//! - [`postgres`]: pool configuration, connection with retry, migrations and
//!   readiness checks on top of SeaORM.
//! - [`common`]: the shared [`DatabaseError`] type and exponential backoff.
//!
//! Enable the `config` feature to load [`postgres::PostgresConfig`] through
//! `core_config::FromEnv`.

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

//! Typed HTTP client for the users API.

use std::time::Duration;

use axum_helpers::ErrorResponse;
use core_config::{ConfigError, env_or_default, env_parse_or};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::models::UserDto;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Where the users API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection URL, e.g. `http://localhost:8080/api/users`
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/users".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `USERS_API_URL` and `USERS_API_TIMEOUT_SECS`, falling back to
    /// [`ClientConfig::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = env_or_default("USERS_API_URL", &defaults.base_url);
        let timeout_secs = env_parse_or("USERS_API_TIMEOUT_SECS", defaults.timeout.as_secs())?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Client for the `/api/users` endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct UserClient {
    client: reqwest::Client,
    base_url: String,
}

impl UserClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: &UserDto) -> ClientResult<UserDto> {
        let response = self.client.post(&self.base_url).json(user).send().await?;
        parse_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: i64) -> ClientResult<UserDto> {
        let response = self.client.get(self.user_url(id)).send().await?;
        parse_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> ClientResult<Vec<UserDto>> {
        let response = self.client.get(&self.base_url).send().await?;
        parse_json(response).await
    }

    #[instrument(skip(self, user))]
    pub async fn update_user(&self, id: i64, user: &UserDto) -> ClientResult<UserDto> {
        let response = self.client.put(self.user_url(id)).json(user).send().await?;
        parse_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        let response = self.client.delete(self.user_url(id)).send().await?;
        ensure_success(response).await.map(|_| ())
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = ensure_success(response).await?;
    Ok(response.json().await?)
}

/// Maps non-2xx responses to [`ClientError`], preferring the server's
/// `ErrorResponse.message` over the raw body.
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|error| error.message)
        .unwrap_or(body);

    warn!(status = %status, message = %message, "Users API request failed");

    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else {
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

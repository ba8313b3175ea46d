//! JSON body extractor with uniform 400 rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but every rejection (syntax error, missing field,
/// wrong content type) becomes a 400 with an `INVALID_JSON` error body.
///
/// ```ignore
/// async fn create_user(JsonBody(payload): JsonBody<UserDto>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|JsonBody(p): JsonBody<Payload>| async move { p.name }),
        )
    }

    async fn send(body: &'static str, content_type: &'static str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn passes_valid_json_through() {
        let (status, body) = send(r#"{"name":"emma"}"#, "application/json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"emma");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request_not_unprocessable() {
        let (status, body) = send("{}", "application/json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "INVALID_JSON");
    }

    #[tokio::test]
    async fn syntax_error_and_wrong_content_type_are_bad_request() {
        assert_eq!(send("{", "application/json").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(send(r#"{"name":"x"}"#, "text/plain").await.0, StatusCode::BAD_REQUEST);
    }
}

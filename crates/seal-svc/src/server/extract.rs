//! Request body extraction.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use common::ServiceError;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body, parsed whatever the `Content-Type` header says.
///
/// Bodies that are not JSON (form posts included) still fail to parse and
/// are rejected as `bad_request`. The router's body limit applies.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            ApiError(ServiceError::BadRequest(format!(
                "request body is not valid JSON: {e}"
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};
    use common::protocol::EncryptRequest;

    async fn extract(content_type: Option<&str>, body: &str) -> Result<EncryptRequest, ApiError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body.to_owned())).unwrap();
        JsonBody::<EncryptRequest>::from_request(req, &())
            .await
            .map(|JsonBody(r)| r)
    }

    #[tokio::test]
    async fn parses_without_content_type() {
        let req = extract(None, r#"{"plaintext":"hi","userkey":"k"}"#)
            .await
            .unwrap();
        assert_eq!(req.plaintext, "hi");
    }

    #[tokio::test]
    async fn parses_with_text_content_type() {
        let req = extract(Some("text/plain"), r#"{"plaintext":"hi","userkey":"k"}"#)
            .await
            .unwrap();
        assert_eq!(req.userkey, "k");
    }

    #[tokio::test]
    async fn form_body_is_bad_request() {
        let err = extract(
            Some("application/x-www-form-urlencoded"),
            "plaintext=hi&userkey=k",
        )
        .await
        .unwrap_err();
        assert_eq!(err.0.code(), "bad_request");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let err = extract(Some("application/json"), r#"{"plaintext":"hi"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err.0, ServiceError::BadRequest(ref m) if m.contains("userkey")));
    }
}

//! Mapping of crate errors onto HTTP responses.

use axum::{
    extract::{rejection::BytesRejection, Request},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use common::{protocol::ErrorResponse, ServiceError};
use tracing::{error, warn};

use crate::crypto::CryptoError;

/// Message returned when the key text has the wrong length.
pub const KEY_LENGTH_MESSAGE: &str = "userkey should be [32]byte as [44]rune";

/// Message returned when the key text is not standard Base64.
pub const KEY_ENCODING_MESSAGE: &str = "userkey should be standard base64 encoding of [32]byte";

/// Handler error: a [`ServiceError`] that renders as an [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<CryptoError> for ApiError {
    fn from(err: CryptoError) -> Self {
        Self(ServiceError::from(err))
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self(ServiceError::PayloadTooLarge);
        }
        Self(ServiceError::BadRequest(rejection.body_text()))
    }
}

// Every authentication-class failure collapses to `DecryptionFailed`.
impl From<CryptoError> for ServiceError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength => ServiceError::InvalidKey(KEY_LENGTH_MESSAGE.into()),
            CryptoError::InvalidKeyEncoding => {
                ServiceError::InvalidKey(KEY_ENCODING_MESSAGE.into())
            }
            CryptoError::InvalidCiphertextEncoding => {
                ServiceError::BadRequest("ciphertext should be url-safe base64".into())
            }
            CryptoError::MessageTooShort => {
                ServiceError::BadRequest("ciphertext is too short to be valid".into())
            }
            CryptoError::AuthenticationFailed | CryptoError::InvalidPlaintextEncoding => {
                ServiceError::DecryptionFailed
            }
            CryptoError::CipherInit => ServiceError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %err, "request failed");
        } else {
            warn!(code = err.code(), "request rejected");
        }

        (status, Json(ErrorResponse::from(&err))).into_response()
    }
}

/// Middleware giving the bodiless 405 and 408 responses produced by the
/// router and the timeout layer an [`ErrorResponse`] body.
///
/// Headers already on the response, such as `Allow`, are kept.
pub async fn json_error_bodies(req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    let err = match resp.status() {
        StatusCode::METHOD_NOT_ALLOWED => ServiceError::MethodNotAllowed,
        StatusCode::REQUEST_TIMEOUT => ServiceError::Timeout,
        _ => return resp,
    };

    let (mut parts, _) = resp.into_parts();
    let (json_parts, body) = ApiError(err).into_response().into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);
    Response::from_parts(parts, body)
}

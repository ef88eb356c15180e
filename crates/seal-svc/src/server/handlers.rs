//! Axum request handlers for all service endpoints.
//!
//! Each request's crypto work is a plain synchronous call on the request task;
//! no state is shared between requests.

use axum::{response::IntoResponse, Json};
use common::{
    protocol::{AliveResponse, DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse},
    ServiceError,
};
use tracing::debug;

use super::{error::ApiError, extract::JsonBody};
use crate::crypto;

/// `POST /encryptPlaintext` — seal `plaintext` under `userkey`.
///
/// Responds with `{"ciphertext": "<url-safe base64>"}`.
pub async fn encrypt_plaintext(
    JsonBody(req): JsonBody<EncryptRequest>,
) -> Result<Json<EncryptResponse>, ApiError> {
    let ciphertext = crypto::seal_text(&req.plaintext, &req.userkey)?;
    debug!(plaintext_len = req.plaintext.len(), "plaintext sealed");
    Ok(Json(EncryptResponse { ciphertext }))
}

/// `POST /decryptCiphertext` — open `ciphertext` under `userkey`.
///
/// Responds with `{"plaintext": "..."}`. Every authentication failure yields
/// the same `decryption_failed` response.
pub async fn decrypt_ciphertext(
    JsonBody(req): JsonBody<DecryptRequest>,
) -> Result<Json<DecryptResponse>, ApiError> {
    let plaintext = crypto::open_text(&req.ciphertext, &req.userkey)?;
    debug!(plaintext_len = plaintext.len(), "ciphertext opened");
    Ok(Json(DecryptResponse { plaintext }))
}

/// `GET /alive` — liveness check.
pub async fn alive() -> Json<AliveResponse> {
    Json(AliveResponse::default())
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    ApiError(ServiceError::NotFound)
}

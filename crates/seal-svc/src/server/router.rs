//! Axum router construction.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::{error, handlers, settings::RouterSettings};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Routes are nested under `settings.base_path` when it is non-empty; the 404
/// fallback covers everything outside them.
pub fn build(settings: &RouterSettings) -> Router {
    let routes = Router::new()
        .route("/encryptPlaintext", post(handlers::encrypt_plaintext))
        .route("/decryptCiphertext", post(handlers::decrypt_ciphertext))
        .route("/alive", get(handlers::alive));

    let app = if settings.base_path.is_empty() {
        routes
    } else {
        Router::new().nest(&settings.base_path, routes)
    };

    with_middleware(app.fallback(handlers::not_found), settings)
}

// `json_error_bodies` must wrap the timeout layer.
fn with_middleware(app: Router, settings: &RouterSettings) -> Router {
    app.layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(middleware::from_fn(error::json_error_bodies))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use axum_test::TestServer;
    use common::protocol::{DecryptResponse, EncryptResponse, ErrorResponse};
    use serde_json::json;
    use tower::ServiceExt;

    const KEY: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

    fn nested() -> RouterSettings {
        RouterSettings {
            base_path: "/crypto".into(),
            ..RouterSettings::default()
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = build(&RouterSettings::default());
        let req = Request::builder()
            .uri("/unknown")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn alive_route_exists() {
        let app = build(&RouterSettings::default());
        let req = Request::builder().uri("/alive").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn base_path_prefixes_routes() {
        let req = Request::builder()
            .uri("/crypto/alive")
            .body(Body::empty())
            .unwrap();
        let resp = build(&nested()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let req = Request::builder().uri("/alive").body(Body::empty()).unwrap();
        let resp = build(&nested()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let settings = RouterSettings {
            max_body_bytes: 64,
            ..RouterSettings::default()
        };
        let body = json!({"plaintext": "x".repeat(256), "userkey": KEY}).to_string();
        let req = Request::builder()
            .method("POST")
            .uri("/encryptPlaintext")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = build(&settings).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn timed_out_request_gets_json_error() {
        let settings = RouterSettings {
            request_timeout: std::time::Duration::from_millis(20),
            ..RouterSettings::default()
        };
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                "late"
            }),
        );
        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let resp = with_middleware(slow, &settings).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "request_timeout");
    }

    #[tokio::test]
    async fn round_trip_through_test_server() {
        let server = TestServer::new(build(&nested())).unwrap();

        let sealed = server
            .post("/crypto/encryptPlaintext")
            .json(&json!({"plaintext": "Hello, World!", "userkey": KEY}))
            .await;
        sealed.assert_status_ok();
        let EncryptResponse { ciphertext } = sealed.json::<EncryptResponse>();
        assert_eq!(ciphertext.len(), 56);

        let opened = server
            .post("/crypto/decryptCiphertext")
            .json(&json!({"ciphertext": ciphertext, "userkey": KEY}))
            .await;
        opened.assert_status_ok();
        assert_eq!(opened.json::<DecryptResponse>().plaintext, "Hello, World!");
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> serde_json::Value {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_are_independent() {
        let app = build(&RouterSettings::default());
        let mut tasks = tokio::task::JoinSet::new();

        for i in 0..32 {
            let app = app.clone();
            tasks.spawn(async move {
                let plaintext = format!("message {i}");
                let sealed = post_json(
                    app.clone(),
                    "/encryptPlaintext",
                    json!({"plaintext": plaintext, "userkey": KEY}),
                )
                .await;
                let ciphertext = sealed["ciphertext"].as_str().unwrap().to_owned();
                let opened = post_json(
                    app,
                    "/decryptCiphertext",
                    json!({"ciphertext": ciphertext, "userkey": KEY}),
                )
                .await;
                (plaintext, ciphertext, opened["plaintext"].as_str().unwrap().to_owned())
            });
        }

        let mut seen = std::collections::HashSet::new();
        while let Some(res) = tasks.join_next().await {
            let (plaintext, ciphertext, opened) = res.unwrap();
            assert_eq!(opened, plaintext);
            assert!(seen.insert(ciphertext), "ciphertext repeated across requests");
        }
        assert_eq!(seen.len(), 32);
    }
}

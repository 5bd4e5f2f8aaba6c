use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use uuid::Uuid;

/// Bodies above this size are not logged.
const MAX_BODY_LOG_SIZE: usize = 1024;

/// Tags every request with an `x-request-id`, logs method/URI on the way
/// in and status/latency on the way out. With `LOG_REQUEST_BODY=true`
/// the JSON body is logged too, after PINs and session tokens have been
/// masked.
pub async fn request_logger(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    req.headers_mut()
        .insert("x-request-id", request_id.parse().unwrap());

    if body_logging_enabled() {
        let (parts, body) = req.into_parts();
        let bytes = match axum::body::to_bytes(body, MAX_BODY_LOG_SIZE).await {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::warn!(request_id = %request_id, method = %method, uri = %uri,
                    "request body too large to log");
                return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
            }
        };
        tracing::info!(request_id = %request_id, method = %method, uri = %uri,
            body = %render_body(&bytes), "request received");
        req = Request::from_parts(parts, Body::from(bytes));
    } else {
        tracing::info!(request_id = %request_id, method = %method, uri = %uri,
            "request received");
    }

    let mut response = next.run(req).await;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis(),
        "request completed"
    );

    response
        .headers_mut()
        .insert("x-request-id", request_id.parse().unwrap());
    response
}

fn body_logging_enabled() -> bool {
    std::env::var("LOG_REQUEST_BODY")
        .map(|v| v.parse().unwrap_or(false))
        .unwrap_or(false)
}

fn render_body(bytes: &Bytes) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(json) => crate::utils::sanitize::sanitize_json(&json).to_string(),
        Err(_) => format!("[non-json, {} bytes]", bytes.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use axum::{body::Body, routing::post, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn tags_responses_with_a_request_id() {
        let app = Router::new()
            .route("/login", post(|| async { "ok" }))
            .layer(axum::middleware::from_fn(request_logger));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[test]
    fn renders_json_bodies_with_secrets_masked() {
        let bytes = Bytes::from(r#"{"phone":"0800","pin":"1234"}"#);
        let rendered = render_body(&bytes);
        assert!(rendered.contains("0800"));
        assert!(!rendered.contains("1234"));
    }

    #[test]
    fn renders_non_json_bodies_as_a_placeholder() {
        let bytes = Bytes::from("phone=0800&pin=1234");
        assert_eq!(render_body(&bytes), "[non-json, 19 bytes]");
    }
}

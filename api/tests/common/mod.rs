use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestRequest, TestServer};
use clap::Parser;
use scantry_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};

const EMAIL_HEADER: &str = "x-auth-request-email";

/// Server over the in-memory backend, trusting the proxy e-mail header.
/// The model endpoint points at a closed port so AI calls fail fast.
pub async fn test_server() -> TestServer {
    let args = Args::try_parse_from([
        "scantry-api",
        "--project-id",
        "integration",
        "--storage-backend",
        "memory",
        "--auth-mode",
        "trusted-header",
        "--gemini-base-url",
        "http://127.0.0.1:9",
    ])
    .expect("valid arguments");

    let app_state = state(Arc::new(args)).await.expect("state");
    let app = router(app_state).expect("router");

    TestServer::new(app).expect("test server")
}

pub trait AsUser {
    fn as_user(self, email: &'static str) -> Self;
}

impl AsUser for TestRequest {
    fn as_user(self, email: &'static str) -> Self {
        self.add_header(
            HeaderName::from_static(EMAIL_HEADER),
            HeaderValue::from_static(email),
        )
    }
}

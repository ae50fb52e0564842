use crate::cli::tests::fake_args;
use crate::cli::Args;
use crate::http::responses::ApiResponse;
use crate::http::router;
use axum_test::{TestResponse, TestServer};
use http::{Method, StatusCode};

pub fn test_server() -> TestServer {
    test_server_with(&fake_args())
}

pub fn test_server_with(args: &Args) -> TestServer {
    let router = router::new(args).expect("Failed to build the router.");
    TestServer::new(router).expect("Failed to run test server.")
}

fn header<'a>(response: &'a TestResponse, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

fn assert_cors_headers(response: &TestResponse, origin: &str) {
    assert_eq!(header(response, "access-control-allow-origin"), Some(origin));
    assert_eq!(
        header(response, "access-control-allow-methods"),
        Some("GET, POST, OPTIONS"),
    );
    assert_eq!(
        header(response, "access-control-allow-headers"),
        Some("Content-Type"),
    );
}

#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    let server = test_server();

    let health = server.get("/api/health").await;
    let tutorials = server.get("/api/tutorials").await;
    let rejected = server.post("/api/tutorials").await;

    assert_cors_headers(&health, "http://localhost:3000");
    assert_cors_headers(&tutorials, "http://localhost:3000");
    assert_cors_headers(&rejected, "http://localhost:3000");
}

#[tokio::test]
async fn test_preflight_short_circuits() {
    let server = test_server();

    for path in ["/api/health", "/api/tutorials"] {
        let response = server.method(Method::OPTIONS, path).await;

        // `/api/tutorials` would answer 405 if the handler ran.
        response.assert_status_ok();
        assert!(response.as_bytes().is_empty());
        assert_cors_headers(&response, "http://localhost:3000");
    }
}

#[tokio::test]
async fn test_preflight_on_unknown_path() {
    let server = test_server();

    let response = server.method(Method::OPTIONS, "/api/unknown").await;

    response.assert_status_ok();
    assert!(response.as_bytes().is_empty());
    assert_cors_headers(&response, "http://localhost:3000");
}

#[tokio::test]
async fn test_unknown_path() {
    let server = test_server();

    for path in ["/", "/api", "/api/unknown", "/health"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&ApiResponse::<()>::error("Not found"));
        assert_cors_headers(&response, "http://localhost:3000");
    }
}

#[tokio::test]
async fn test_wildcard_origin_by_default() {
    let server = test_server_with(&Args::default());

    let response = server.get("/api/health").await;

    assert_cors_headers(&response, "*");
}

#[tokio::test]
async fn test_configured_origin() {
    let args = Args {
        allowed_origin: String::from("https://tutorials.example.com"),
        ..Args::default()
    };
    let server = test_server_with(&args);

    let response = server.method(Method::OPTIONS, "/api/tutorials").await;

    assert_cors_headers(&response, "https://tutorials.example.com");
}

#[test]
fn test_invalid_origin_is_rejected() {
    let args = Args {
        allowed_origin: String::from("https://tutorials.example.com\r\nx-injected: 1"),
        ..Args::default()
    };

    assert!(router::new(&args).is_err());
}

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use std::time::Instant;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    // Missing when the router is driven without a socket, e.g. in tests.
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(address)| address.ip().to_string())
        .unwrap_or_else(|| String::from("unknown"));

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed().as_micros();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        status = response.status().as_u16(),
        client_ip = %client_ip,
        processing_time_us = elapsed_time,
    );

    response
}

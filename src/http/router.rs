use crate::cli::Args;
use crate::http::cors::{self, CorsPolicy};
use crate::http::{middleware, responses};
use crate::{health, tutorials};
use anyhow::Context;
use axum::{routing::any, Router};
use tower::ServiceBuilder;

pub fn new(args: &Args) -> anyhow::Result<Router> {
    let cors_policy = CorsPolicy::new(args).with_context(|| {
        format!(
            "`{}` can't be used as an allowed origin header value",
            args.allowed_origin()
        )
    })?;
    tracing::info!(
        allowed_origin = args.allowed_origin(),
        "Initialized HTTP configuration."
    );

    let api_routes = Router::new()
        .route("/health", any(health::handlers::healthcheck))
        .route("/tutorials", any(tutorials::handlers::list));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback(responses::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(axum::middleware::from_fn_with_state(
                    cors_policy,
                    cors::cors,
                )),
        ))
}

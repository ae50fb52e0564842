use anyhow::Context;
use clap::Parser;
use cli::Args;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

mod cli;
mod health;
mod http;
mod logging;
mod tutorials;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();
    tracing::info!(
        "Launching {}, version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    serve(&args).await
}

async fn serve(args: &Args) -> anyhow::Result<()> {
    let router = http::router::new(args)?;
    let listen_address = args.listen_address();
    let listener = TcpListener::bind(listen_address)
        .await
        .with_context(|| format!("Failed to bind to {listen_address}"))?;
    tracing::info!("Server starting on port {}...", args.port);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server failed while serving requests")?;

    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!("Failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, draining in-flight requests.");
}

#[cfg(test)]
mod tests {
    use super::serve;
    use crate::cli::Args;
    use std::net::{IpAddr, Ipv4Addr};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_serve_fails_when_port_is_taken() {
        let occupant = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind the occupying listener.");
        let port = occupant
            .local_addr()
            .expect("Failed to read the occupied address.")
            .port();
        let args = Args {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            ..Args::default()
        };

        let error = serve(&args)
            .await
            .expect_err("Serving on an occupied port should fail.");

        assert!(format!("{error:#}").contains("Failed to bind"));
    }
}

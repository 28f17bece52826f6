use std::future::Future;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::app::App;
use crate::config::ServerConfig;
use crate::error::ServerError;

/// Binds the configured address and serves until Ctrl-C.
///
/// A bind failure is returned as-is; there is no retry.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.display_addr(),
            source,
        })?;

    println!("{}", config.startup_line());
    info!(listen_addr = %listener.local_addr()?, "starting api server");

    serve_with_listener(listener, shutdown_signal()).await
}

/// Serves the router on an already bound listener until `shutdown` resolves.
pub async fn serve_with_listener<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, App::router())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("api server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // without a signal handler the server can only be killed
        warn!(%error, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}

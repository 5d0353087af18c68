/*
 * Responsibility
 * - Config読み込み → tracing 初期化 → Router 組み立て
 * - Middleware の適用 (subject / http)
 * - axum::serve() で起動、signal で graceful shutdown
 */
use anyhow::Result;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, state::AppState};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let app = build_router(&config);

    let listener = TcpListener::bind(config.addr).await?;
    info!(
        addr = %config.addr,
        subject_header = %config.subject_header,
        timeout_secs = config.request_timeout.as_secs(),
        "jwt-subject listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server has shut down gracefully");
    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    let state = AppState::new(config);

    let router = Router::new()
        .nest("/api/v1", api::v1::routes())
        .with_state(state);

    // subject は trace span の内側で解決させる
    let router = middleware::subject::apply(router);
    middleware::http::apply(router, config)
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
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
}

#![forbid(unsafe_code)]

use rolodex_server::{build_router, AppState, ServerConfig};
use rolodex_service::ContactService;
use rolodex_store::{ContactStore, SqliteStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cfg = ServerConfig::from_env()?;
    init_tracing(cfg.log_json);

    let store = Arc::new(
        SqliteStore::open(&cfg.db_path)
            .map_err(|e| format!("open contacts database {}: {e}", cfg.db_path))?,
    );
    info!("connected to the contacts database at {}", cfg.db_path);

    let service = Arc::new(ContactService::new(
        Arc::clone(&store) as Arc<dyn ContactStore>
    ));
    let state = AppState::with_config(service, cfg.api.clone());
    let app = build_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr)
        .await
        .map_err(|e| format!("bind {}: {e}", cfg.bind_addr))?;
    info!("rolodex-server listening on {}", cfg.bind_addr);

    let drain = cfg.shutdown_drain;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            tokio::time::sleep(drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    if let Err(e) = store.close().await {
        error!("closing contacts database: {e}");
    }
    Ok(())
}

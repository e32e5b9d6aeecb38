use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, CorsConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::routes::{self, AppState};
use service::contact::{repo::seaorm::SeaOrmSubmissionStore, SubmissionService};

/// CORS for the configured browser origins, with credentials.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid cors origin `{o}`")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Router wired to an already constructed service.
pub fn build_app(svc: Arc<SubmissionService>, cors: &CorsConfig) -> anyhow::Result<Router> {
    Ok(routes::build_router(AppState::new(svc), build_cors(cors)?))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
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
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}

/// Public entry: connect the store, build the app and serve until shutdown.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .context("connect to database")?;
    models::db::ping(&db).await.context("database ping")?;

    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await.context("run migrations")?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let store = Arc::new(SeaOrmSubmissionStore::new(db.clone()));
    let svc = Arc::new(SubmissionService::new(store));
    let app = build_app(svc, &cfg.cors)?;

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, origins = ?cfg.cors.allowed_origins, "contact form API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await.context("close database")?;
    info!(event = "store_closed", "database connection closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_unencodable_origin() {
        let cfg = CorsConfig { allowed_origins: vec!["http://bad\norigin".into()] };
        assert!(build_cors(&cfg).is_err());
    }

    #[test]
    fn bind_addr_from_config() {
        let cfg = ServerConfig { host: "0.0.0.0".into(), port: 5000, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap().port(), 5000);
    }
}

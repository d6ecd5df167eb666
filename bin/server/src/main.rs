use std::process::ExitCode;
use std::sync::Arc;
use table_finder_roster::{CsvSource, GuestStore};
use table_finder_server::{AppState, build_router, config::ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(roster = %config.roster.path.display(), "Loaded configuration");

    // The seating list is read once; a broken file stops startup.
    let store = GuestStore::new(CsvSource::from_config(&config.roster));
    match store.load() {
        Ok(roster) => tracing::info!(guests = roster.len(), "Seating list ready"),
        Err(e) => {
            tracing::error!(error = %e, "failed to load seating list");
            return ExitCode::FAILURE;
        }
    }

    let app_state = Arc::new(AppState::new(
        store,
        config.session.clone(),
        config.roster.table_label.clone(),
    ));

    // Spawn periodic session cleanup task
    let cleanup_state = Arc::clone(&app_state);
    let cleanup_interval_secs = config.session.cleanup_interval_seconds;
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(cleanup_interval_secs));
        loop {
            interval.tick().await;
            let removed = cleanup_state.sessions.remove_idle(chrono::Utc::now());
            if removed > 0 {
                tracing::debug!(
                    removed_sessions = removed,
                    live_sessions = cleanup_state.sessions.len(),
                    "Periodic session cleanup"
                );
            }
        }
    });

    let app = build_router(app_state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %config.bind_addr, "failed to bind to address");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("listening on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

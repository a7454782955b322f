use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod albums;
mod error;
mod extract;
mod models;
mod store;

use models::ServerConfig;
use store::AlbumRepository;

#[derive(Clone)]
pub struct AppState {
    album_repo: Arc<AlbumRepository>,
}

impl AppState {
    /// State holding the boot-time seed albums
    pub fn seeded() -> Self {
        Self {
            album_repo: Arc::new(AlbumRepository::seeded()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "albums_api=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::default();
    let state = AppState::seeded();
    info!("Album store seeded with {} records", state.album_repo.count().await);

    let app = app(state);

    let addr = config.addr();
    info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Full router with request logging and panic recovery
fn app(state: AppState) -> Router {
    Router::new()
        .merge(albums::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

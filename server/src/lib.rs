//! Web front-end and API proxy for the Lost Ark sibling lookup.
//!
//! Two surfaces share one upstream client:
//!
//! - `GET /api/characters/{character_name}` relays the sibling list as JSON.
//!   The caller's key travels in the `x-api-key` header.
//! - `GET /` and `POST /api-key` serve a small HTML page that keeps the key
//!   in a browser cookie and renders the siblings as a table.
//!
//! # Configuration
//!
//! | Variable           | Default                                        |
//! |--------------------|------------------------------------------------|
//! | `LOSTARK_WEB_ADDR` | `0.0.0.0:3000`                                 |
//! | `LOSTARK_API_BASE` | `https://developer-lostark.game.onstove.com`   |
//! | `RUST_LOG`         | unset (errors only)                            |

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use lostark_siblings::config::API_KEY_HEADER;
use lostark_siblings::SiblingsClient;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod cookies;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub fn init_tracing() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
}

/// Build the application router around an existing state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(routes::page::index))
        .route("/api-key", post(routes::page::save_api_key))
        .route(
            "/api/characters/{character_name}",
            get(routes::characters::get_siblings),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already-bound listener until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

pub async fn start_server(config: Config) -> Result<(), BoxError> {
    info!("Upstream API at {}", config.api_base);
    let client = SiblingsClient::builder().base_url(&config.api_base).build()?;
    let state = Arc::new(AppState::new(client));

    info!("Binding to {}", config.addr);
    let listener = TcpListener::bind(config.addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    serve(listener, state).await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        } else {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

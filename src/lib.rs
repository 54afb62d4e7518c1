//! # Portal - Assignment Submission Portal
//!
//! Native side of the portal: the `portal` command line client and the server
//! that hosts the web UI next to the candidates API.
//!
//! ## Features
//!
//! - **Form client**: validate and submit an assignment from the terminal
//! - **Confirmation**: show or clear the last persisted submission
//! - **Candidates API**: canned mock, or a same-origin relay to the real service
//! - **Web UI**: the `ui` crate's build, embedded and served as a SPA
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portal::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let app = portal::create_app(&settings);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Domain logic lives in `portal-core`; this crate only provides adapters:
//! - **Adapters**: reqwest client, file store, mock/relay handlers, UI assets
//! - **Config**: `portal.toml` + CLI/env overrides
//! - **Commands**: the CLI subcommands wired to the core

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;

use crate::adapters::{mock_api, ui_handler, upstream};
use crate::config::Settings;
use axum::{
    routing::{get, post},
    Router,
};

/// Path the candidates endpoints are mounted under
pub const CANDIDATES_API_PREFIX: &str = "/api/tools/candidates";

/// Creates the Axum router: candidates API (mock or relay) plus the embedded UI.
pub fn create_app(settings: &Settings) -> Router {
    let candidates = if settings.mock.enabled {
        tracing::info!(levels = settings.mock.levels.len(), "serving mock candidates API");
        Router::new()
            .route("/levels", get(mock_api::get_levels))
            .route("/assignments", post(mock_api::post_assignment))
            .with_state(mock_api::MockApiState::from_settings(&settings.mock))
    } else {
        tracing::info!("relaying candidates API to {}", settings.api.levels_url);
        Router::new()
            .route("/levels", get(upstream::get_levels))
            .route("/assignments", post(upstream::post_assignment))
            .with_state(upstream::UpstreamState::new(settings.api.clone()))
    };

    Router::new()
        .nest(CANDIDATES_API_PREFIX, candidates)
        .fallback(ui_handler::serve_ui)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}

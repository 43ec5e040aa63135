// HTTP surface: one route serving the status board

use crate::config::PageChrome;
use crate::systemd::{self, UnitCatalog, UnitProbe};
use crate::web::render;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<UnitCatalog>,
    pub probe: Arc<dyn UnitProbe>,
    pub chrome: Arc<PageChrome>,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

/// Build the status board: discover units, probe each one, classify, render.
///
/// The pipeline blocks on one systemctl process at a time for every unit,
/// so it runs on the blocking pool rather than stalling the async runtime.
/// Each request rebuilds the board from scratch; nothing is cached.
async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let AppState { catalog, probe, chrome } = state;

    let body = tokio::task::spawn_blocking(move || -> crate::error::Result<String> {
        let records = systemd::snapshot(&catalog, probe.as_ref())?;
        Ok(render::page(&chrome, &records))
    })
    .await
    .map_err(|e| {
        tracing::error!("Status board task failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(|e| {
        tracing::error!("Failed to build status board: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Html(body))
}

//! Pass-through to the real candidates API
//!
//! Used instead of the mock so the browser UI can stay same-origin.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::ApiSettings;

#[derive(Clone)]
pub struct UpstreamState {
    client: reqwest::Client,
    api: Arc<ApiSettings>,
}

impl UpstreamState {
    pub fn new(api: ApiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api: Arc::new(api),
        }
    }
}

async fn relay(request: reqwest::RequestBuilder, target: &str) -> Response {
    let upstream = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("upstream {} unreachable: {}", target, e);
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    match upstream.bytes().await {
        Ok(body) => {
            info!(status = status.as_u16(), "relayed {}", target);
            (status, [(header::CONTENT_TYPE, content_type)], body.to_vec()).into_response()
        }
        Err(e) => {
            error!("failed reading upstream {} body: {}", target, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

pub async fn get_levels(State(state): State<UpstreamState>) -> Response {
    let request = state.client.get(&state.api.levels_url);
    relay(request, &state.api.levels_url).await
}

pub async fn post_assignment(State(state): State<UpstreamState>, body: Bytes) -> Response {
    let request = state
        .client
        .post(&state.api.assignments_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.to_vec());
    relay(request, &state.api.assignments_url).await
}

//! gloo-net client for the candidates API
//!
//! Calls go to the same origin; the `portal serve` process answers them
//! itself or relays them to the configured service.

use async_trait::async_trait;
use gloo_net::http::Request;
use portal_core::ports::ErrorResponse;
use portal_core::{ApiError, AssignmentPayload, CandidatesApi, LevelsResponse};

const API_BASE: &str = "/api/tools/candidates";

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooCandidatesApi;

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl CandidatesApi for GlooCandidatesApi {
    async fn fetch_levels(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/levels", API_BASE);
        let response = Request::get(&url).send().await.map_err(transport)?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                messages: None,
            });
        }

        let body: LevelsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.levels)
    }

    async fn submit_assignment(&self, payload: &AssignmentPayload) -> Result<(), ApiError> {
        let url = format!("{}/assignments", API_BASE);
        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize body: {}", e)))?
            .send()
            .await
            .map_err(transport)?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let messages = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.errors);
        Err(ApiError::Status { status, messages })
    }
}

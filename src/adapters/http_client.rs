//! reqwest adapter for the candidates API

use async_trait::async_trait;
use portal_core::ports::ErrorResponse;
use portal_core::{ApiError, AssignmentPayload, CandidatesApi, LevelsResponse};
use tracing::debug;

use crate::config::ApiSettings;

pub struct HttpCandidatesApi {
    client: reqwest::Client,
    levels_url: String,
    assignments_url: String,
}

impl HttpCandidatesApi {
    pub fn new(levels_url: impl Into<String>, assignments_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            levels_url: levels_url.into(),
            assignments_url: assignments_url.into(),
        }
    }

    pub fn from_settings(api: &ApiSettings) -> Self {
        Self::new(api.levels_url.clone(), api.assignments_url.clone())
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl CandidatesApi for HttpCandidatesApi {
    async fn fetch_levels(&self) -> Result<Vec<String>, ApiError> {
        debug!("GET {}", self.levels_url);
        let response = self
            .client
            .get(&self.levels_url)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
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
        debug!("POST {}", self.assignments_url);
        let response = self
            .client
            .post(&self.assignments_url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let messages = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.errors);
        Err(ApiError::Status {
            status: status.as_u16(),
            messages,
        })
    }
}

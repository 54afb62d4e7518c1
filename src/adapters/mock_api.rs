//! Canned candidates API
//!
//! Answers the levels and assignments endpoints the same way the real service
//! does, so the UI and the CLI can be exercised offline.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portal_core::ports::ErrorResponse;
use portal_core::validation::{input_len, ValidationError, DESCRIPTION_MIN};
use portal_core::{Field, LevelsResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::MockSettings;

#[derive(Debug, Clone)]
pub struct MockApiState {
    levels: Arc<Vec<String>>,
    fail_levels: bool,
}

impl MockApiState {
    pub fn new(levels: Vec<String>, fail_levels: bool) -> Self {
        Self {
            levels: Arc::new(levels),
            fail_levels,
        }
    }

    pub fn from_settings(mock: &MockSettings) -> Self {
        Self::new(mock.levels.clone(), mock.fail_levels)
    }
}

/// Assignment body as received; every field may be absent
#[derive(Debug, Default, Deserialize)]
struct IncomingAssignment {
    name: Option<String>,
    email: Option<String>,
    assignment_description: Option<String>,
    github_repo_url: Option<String>,
    candidate_level: Option<String>,
}

impl IncomingAssignment {
    fn value(&self, field: Field) -> &str {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Description => &self.assignment_description,
            Field::RepoUrl => &self.github_repo_url,
            Field::Level => &self.candidate_level,
        };
        value.as_deref().unwrap_or_default()
    }

    /// Presence of every field plus the description minimum
    fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for field in Field::ALL {
            let value = self.value(field);
            if value.is_empty() {
                problems.push(ValidationError::Required(field).to_string());
            } else if field == Field::Description && input_len(value) < DESCRIPTION_MIN {
                problems.push(
                    ValidationError::TooShort {
                        field,
                        min: DESCRIPTION_MIN,
                    }
                    .to_string(),
                );
            }
        }
        problems
    }
}

pub async fn get_levels(State(state): State<MockApiState>) -> Response {
    if state.fail_levels {
        warn!("mock levels endpoint configured to fail");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    Json(LevelsResponse {
        levels: state.levels.as_ref().clone(),
    })
    .into_response()
}

pub async fn post_assignment(body: Bytes) -> Response {
    let assignment = serde_json::from_slice::<Option<IncomingAssignment>>(&body)
        .ok()
        .flatten()
        .unwrap_or_default();

    let problems = assignment.problems();
    if !problems.is_empty() {
        warn!(count = problems.len(), "mock rejected assignment");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse { errors: problems }),
        )
            .into_response();
    }

    info!(
        level = assignment.value(Field::Level),
        "mock accepted assignment"
    );
    (StatusCode::OK, Json(serde_json::Value::Null)).into_response()
}

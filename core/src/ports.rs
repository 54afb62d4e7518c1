//! Ports to the outside world: the candidates API, persisted storage and
//! view navigation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, StorageError};
use crate::form::FormValues;
use crate::validation::trim_input;

/// Body of a successful `GET` on the levels endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelsResponse {
    pub levels: Vec<String>,
}

/// Body of a failed `POST` on the assignments endpoint, when structured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

/// JSON body sent to the assignments endpoint. All values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPayload {
    pub name: String,
    pub email: String,
    pub assignment_description: String,
    pub github_repo_url: String,
    pub candidate_level: String,
}

impl From<&FormValues> for AssignmentPayload {
    fn from(values: &FormValues) -> Self {
        Self {
            name: trim_input(&values.name).to_string(),
            email: trim_input(&values.email).to_string(),
            assignment_description: trim_input(&values.description).to_string(),
            github_repo_url: trim_input(&values.repo_url).to_string(),
            candidate_level: trim_input(&values.level).to_string(),
        }
    }
}

/// Remote candidates API.
///
/// Futures are not required to be `Send`: the browser adapter runs on a
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait CandidatesApi {
    /// Fetch the selectable candidate levels
    async fn fetch_levels(&self) -> Result<Vec<String>, ApiError>;

    /// Submit an assignment. Any 2xx is success; the body is ignored.
    async fn submit_assignment(&self, payload: &AssignmentPayload) -> Result<(), ApiError>;
}

/// Durable string key-value storage (localStorage or a file on disk)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Moves the user to the confirmation view
pub trait Navigator {
    fn to_confirmation(&self);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<F: Fn()> Navigator for F {
    fn to_confirmation(&self) {
        self()
    }
}

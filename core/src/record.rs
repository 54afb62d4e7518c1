use serde::{Deserialize, Serialize};

use crate::form::FormValues;
use crate::validation::trim_input;

/// Storage key holding the last successful submission
pub const FORM_DATA_KEY: &str = "form-data";

/// Snapshot of the last successful submission, keyed by display label.
///
/// Field order is the order the confirmation view lists the entries in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "GitHub Repo URL")]
    pub repo_url: String,
    #[serde(rename = "Level")]
    pub level: String,
}

impl From<&FormValues> for SubmittedRecord {
    fn from(values: &FormValues) -> Self {
        Self {
            name: trim_input(&values.name).to_string(),
            email: trim_input(&values.email).to_string(),
            description: trim_input(&values.description).to_string(),
            repo_url: trim_input(&values.repo_url).to_string(),
            level: trim_input(&values.level).to_string(),
        }
    }
}

impl SubmittedRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::config::{ApiSettings, MockSettings, Settings, StorageSettings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_api(&settings.api) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_storage(&settings.storage) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_mock(&settings.mock) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &crate::config::ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_api(api: &ApiSettings) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            ("api.levels_url", &api.levels_url),
            ("api.assignments_url", &api.assignments_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| Self::check_http_url(field, value).err())
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_http_url(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field.to_string()));
        }

        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(ValidationError::InvalidValue {
                field: field.to_string(),
                reason: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
            }),
            Err(e) => Err(ValidationError::InvalidValue {
                field: field.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn validate_storage(storage: &StorageSettings) -> Result<(), Vec<ValidationError>> {
        if storage.path.as_os_str().is_empty() {
            Err(vec![ValidationError::MissingField("storage.path".to_string())])
        } else {
            Ok(())
        }
    }

    fn validate_mock(mock: &MockSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        if mock.enabled && mock.levels.is_empty() {
            errors.push(ValidationError::InvalidValue {
                field: "mock.levels".to_string(),
                reason: "At least one level must be configured".to_string(),
            });
        }

        for (idx, level) in mock.levels.iter().enumerate() {
            if level.trim().is_empty() {
                errors.push(ValidationError::MissingField(format!("mock.levels[{}]", idx)));
            } else if !seen.insert(level.as_str()) {
                errors.push(ValidationError::Duplicate(format!(
                    "Level '{}' appears more than once",
                    level
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_LEVELS_URL: &str = "https://tools.qa.public.ale.ai/api/tools/candidates/levels";
pub const DEFAULT_ASSIGNMENTS_URL: &str =
    "https://tools.qa.public.ale.ai/api/tools/candidates/assignments";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub storage: StorageSettings,
    /// Candidates API served by `portal serve`
    #[serde(default)]
    pub mock: MockSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Remote candidates API used by the CLI, and proxied by the server when the mock is off
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiSettings {
    pub levels_url: String,
    pub assignments_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageSettings {
    /// JSON file standing in for the browser's localStorage
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MockSettings {
    /// Serve canned responses instead of proxying to `api`
    #[serde(default = "default_mock_enabled")]
    pub enabled: bool,
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
    /// Answer the levels endpoint with a 500
    #[serde(default)]
    pub fail_levels: bool,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            enabled: default_mock_enabled(),
            levels: default_levels(),
            fail_levels: false,
        }
    }
}

fn default_mock_enabled() -> bool {
    true
}

fn default_levels() -> Vec<String> {
    vec!["Junior".to_string(), "Middle".to_string(), "Senior".to_string()]
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (config file, then CLI/env overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(File::from(cli.config.clone()).required(false))?;
        settings.apply_cli_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let config_path = root.as_ref().join("portal");
        let settings = Self::load(File::from(config_path).required(false))?;
        settings.validate()?;
        Ok(settings)
    }

    fn load<S>(source: S) -> Result<Self, anyhow::Error>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let s = Config::builder()
            .add_source(source)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("api.levels_url", DEFAULT_LEVELS_URL)?
            .set_default("api.assignments_url", DEFAULT_ASSIGNMENTS_URL)?
            .set_default("storage.path", "portal-data.json")?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(url) = &cli.levels_url {
            self.api.levels_url = url.clone();
        }
        if let Some(url) = &cli.assignments_url {
            self.api.assignments_url = url.clone();
        }
        if let Some(path) = &cli.storage {
            self.storage.path = path.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

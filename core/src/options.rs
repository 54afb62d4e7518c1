//! Options loader for the level selector
//!
//! `Unfetched -> Loading -> {Loaded | Failed}`. The fetch starts on the first
//! open of the selector, never on render. `Loaded` and `Failed` are terminal
//! for the session; reopening does nothing.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::ports::CandidatesApi;

/// Text of the single row shown when the levels could not be fetched
pub const OPTIONS_ERROR: &str = "Could not get options";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOption {
    pub value: String,
    pub label: String,
}

impl From<String> for LevelOption {
    fn from(level: String) -> Self {
        Self {
            label: level.clone(),
            value: level,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionsState {
    #[default]
    Unfetched,
    Loading,
    Loaded(Vec<LevelOption>),
    Failed,
}

/// A row of the open dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownRow {
    Spinner,
    Option(LevelOption),
    Error(&'static str),
}

impl OptionsState {
    pub fn options(&self) -> &[LevelOption] {
        match self {
            OptionsState::Loaded(options) => options,
            _ => &[],
        }
    }

    pub fn rows(&self) -> Vec<DropdownRow> {
        match self {
            OptionsState::Unfetched | OptionsState::Loading => vec![DropdownRow::Spinner],
            OptionsState::Loaded(options) => {
                options.iter().cloned().map(DropdownRow::Option).collect()
            }
            OptionsState::Failed => vec![DropdownRow::Error(OPTIONS_ERROR)],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OptionsLoader {
    state: OptionsState,
}

impl OptionsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OptionsState {
        &self.state
    }

    /// Record that the selector was opened.
    ///
    /// Returns `true` exactly once per session: when the loader moved from
    /// `Unfetched` to `Loading` and the caller has to start the fetch.
    pub fn begin_open(&mut self) -> bool {
        if self.state == OptionsState::Unfetched {
            self.state = OptionsState::Loading;
            tracing::debug!("level options: unfetched -> loading");
            true
        } else {
            false
        }
    }

    /// Complete the fetch started by [`begin_open`](Self::begin_open).
    /// Ignored unless the loader is `Loading`.
    pub fn resolve(&mut self, result: Result<Vec<String>, ApiError>) {
        if self.state != OptionsState::Loading {
            return;
        }

        self.state = match result {
            Ok(levels) => {
                tracing::info!(count = levels.len(), "level options loaded");
                OptionsState::Loaded(levels.into_iter().map(LevelOption::from).collect())
            }
            Err(e) => {
                tracing::warn!("failed to load level options: {}", e);
                OptionsState::Failed
            }
        };
    }

    /// Open the selector, fetching through `api` on first use.
    pub async fn open<A: CandidatesApi + ?Sized>(&mut self, api: &A) -> &OptionsState {
        if self.begin_open() {
            let result = api.fetch_levels().await;
            self.resolve(result);
        }
        &self.state
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five inputs of the assignment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Description,
    RepoUrl,
    Level,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Description,
        Field::RepoUrl,
        Field::Level,
    ];

    /// Key used in the JSON body sent to the assignments endpoint.
    pub fn wire_key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Description => "assignment_description",
            Field::RepoUrl => "github_repo_url",
            Field::Level => "candidate_level",
        }
    }

    /// Label shown next to the input and used as key of the persisted record.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Description => "Description",
            Field::RepoUrl => "GitHub Repo URL",
            Field::Level => "Level",
        }
    }

    /// Subject used in validation messages ("GitHub URL is required").
    pub(crate) fn subject(self) -> &'static str {
        match self {
            Field::RepoUrl => "GitHub URL",
            other => other.label(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Assignment submission portal - form client, confirmation viewer and mock API server
#[derive(Parser, Debug, Clone)]
#[command(name = "portal", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "PORTAL_CONFIG", default_value = "portal.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "PORTAL_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "PORTAL_PORT")]
    pub port: Option<u16>,

    /// URL of the candidate levels endpoint
    #[arg(long, env = "PORTAL_LEVELS_URL")]
    pub levels_url: Option<String>,

    /// URL of the assignments endpoint
    #[arg(long, env = "PORTAL_ASSIGNMENTS_URL")]
    pub assignments_url: Option<String>,

    /// File holding the persisted submission
    #[arg(long, env = "PORTAL_STORAGE")]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the web UI and the candidates API
    Serve,
    /// Open the level selector and list its rows
    Levels,
    /// Validate and submit an assignment
    Submit(SubmitArgs),
    /// Show the last submitted data
    Show,
    /// Forget the last submitted data
    Clear,
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Assignment description (at least 10 characters)
    #[arg(long)]
    pub description: String,

    /// GitHub repository URL
    #[arg(long)]
    pub repo_url: String,

    /// Candidate level, as listed by `portal levels`
    #[arg(long)]
    pub level: String,
}

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the newest menu post, store new lunch entries and print the week.
    Run(RunArgs),
    /// Extract the lunch menu from a saved detail page.
    Extract(ExtractArgs),
    /// Print the URL of the newest post on the board.
    Latest(LatestArgs),
    /// Print the stored lunch entries.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// YAML config file (fetch and store settings).
    #[arg(long)]
    pub config: Option<String>,

    /// Board listing URL (must be http/https).
    #[arg(long)]
    pub list_url: Option<String>,

    /// HTTP timeout per request.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent to the board.
    #[arg(long)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// SQLite database path.
    #[arg(long)]
    pub db: Option<String>,

    /// Print entries as JSON Lines instead of the grouped listing.
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            db: self.db.clone(),
            ..self.source.overrides()
        }
    }
}

impl SourceArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            list_url: self.list_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
            db: None,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Saved detail page HTML.
    #[arg(long)]
    pub html: String,

    /// Print entries as JSON Lines instead of the grouped listing.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LatestArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// YAML config file (only the store section is used).
    #[arg(long)]
    pub config: Option<String>,

    /// SQLite database path.
    #[arg(long)]
    pub db: Option<String>,

    /// Print entries as JSON Lines instead of the grouped listing.
    #[arg(long)]
    pub json: bool,
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::model::EntityId;
use crate::mvu::round::StrokeDelta;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keep score for a disc golf round", long_about = None)]
pub struct Args {
    /// Base URL of the scoring API, e.g. https://example.org/api
    #[arg(
        long,
        env = "RUSTY_DISC_API_URL",
        value_name = "URL",
        value_parser = crate::args::validation::check_api_url
    )]
    pub api_url: String,
    /// Bearer token. Takes precedence over the session file.
    #[arg(long, env = "RUSTY_DISC_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// JSON session left behind by the login flow.
    #[arg(
        long,
        env = "RUSTY_DISC_SESSION",
        value_name = "PATH",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub session_file: Option<PathBuf>,
    /// Per-request timeout for API calls.
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub timeout_secs: u64,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the scorecard for a round.
    Show {
        round_id: EntityId,
        /// Focus the current-hole panel on this hole.
        #[arg(long)]
        hole: Option<u32>,
        /// Print the round as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Add or remove one stroke for a player on a hole.
    Stroke {
        round_id: EntityId,
        player_id: EntityId,
        hole_number: u32,
        #[arg(value_enum)]
        direction: Direction,
    },
    /// Mark a round as completed.
    Finish { round_id: EntityId },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl From<Direction> for StrokeDelta {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => StrokeDelta::Increment,
            Direction::Down => StrokeDelta::Decrement,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_url: String,
    pub token: Option<String>,
    pub session_file: Option<PathBuf>,
    pub timeout: Duration,
    pub command: Command,
}

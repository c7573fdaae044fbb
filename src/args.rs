use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, Command, Direction};

/// Parses the command line (and its environment fallbacks).
#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            api_url: args.api_url,
            token: args.token,
            session_file: args.session_file,
            timeout: Duration::from_secs(args.timeout_secs),
            command: args.command,
        }
    }
}

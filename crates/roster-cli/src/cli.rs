//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{add, delete, get, list, update};

/// Manage student records on a roster server.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version = env!("ROSTER_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Server base URL
    #[arg(
        long,
        env = "ROSTER_BASE_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    pub base_url: String,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long, env = "ROSTER_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students, optionally filtered by a search query
    List(list::ListArgs),

    /// Show a single student
    Get(get::GetArgs),

    /// Add a new student
    Add(add::AddArgs),

    /// Edit an existing student
    Update(update::UpdateArgs),

    /// Delete a student
    Delete(delete::DeleteArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_command() {
        let cli = Cli::try_parse_from([
            "roster",
            "--base-url",
            "http://10.0.2.2:8080",
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--email",
            "john@x.com",
            "--department",
            "Eng",
            "--student-number",
            "S1",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://10.0.2.2:8080");
        assert!(matches!(cli.command, Commands::Add(_)));
    }
}

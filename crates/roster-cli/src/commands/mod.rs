//! Subcommand implementations.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use roster_core::{ApiRepository, BaseUrl, StudentStore};
use roster_http::{HttpConfig, HttpStudentApi};

use crate::cli::{Cli, Commands};

/// The store every command drives.
pub type CliStore = StudentStore<ApiRepository<HttpStudentApi>>;

pub async fn handle(cli: Cli) -> Result<()> {
    let store = connect(&cli)?;

    match cli.command {
        Commands::List(args) => list::run(&store, args).await,
        Commands::Get(args) => get::run(&store, args).await,
        Commands::Add(args) => add::run(&store, args).await,
        Commands::Update(args) => update::run(&store, args).await,
        Commands::Delete(args) => delete::run(&store, args).await,
    }
}

/// Build the store from the global flags.
fn connect(cli: &Cli) -> Result<CliStore> {
    let base = BaseUrl::new(&cli.base_url).context("Invalid base URL")?;
    debug!(base = %base, timeout_secs = ?cli.timeout_secs, "connecting to student API");
    let config = HttpConfig {
        timeout: cli.timeout_secs.map(Duration::from_secs),
        ..HttpConfig::default()
    };
    let api = HttpStudentApi::with_config(base, &config).context("Failed to build HTTP client")?;
    Ok(StudentStore::new(ApiRepository::new(api)))
}

/// Turn the store's error message into the command's failure.
///
/// Re-running the command is the retry.
pub fn report<T>(store: &CliStore, result: roster_core::Result<T>) -> Result<T> {
    result.map_err(|err| {
        let message = store
            .snapshot()
            .error_message
            .unwrap_or_else(|| err.to_string());
        anyhow!(message)
    })
}

//! Delete student command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::StudentId;

use super::{CliStore, report};
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Student id
    pub id: String,
}

pub async fn run(store: &CliStore, args: DeleteArgs) -> Result<()> {
    let id: StudentId = args.id.parse().context("Invalid student id")?;

    report(store, store.delete(id).await)?;

    output::success(&format!("Deleted student {}", id));
    Ok(())
}

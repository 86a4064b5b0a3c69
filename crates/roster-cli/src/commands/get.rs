//! Get student command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::StudentId;

use super::{CliStore, report};
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Student id
    pub id: String,

    /// Print the student as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(store: &CliStore, args: GetArgs) -> Result<()> {
    let id: StudentId = args.id.parse().context("Invalid student id")?;

    let student = report(store, store.get(id).await)?;

    if args.json {
        output::json_pretty(&student)
    } else {
        output::student_details(&student);
        Ok(())
    }
}

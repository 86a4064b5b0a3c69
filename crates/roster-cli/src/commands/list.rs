//! List students command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{CliStore, report};
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show students matching this text (name, email, department or number)
    #[arg(long, short)]
    pub search: Option<String>,

    /// Print the students as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn run(store: &CliStore, args: ListArgs) -> Result<()> {
    report(store, store.refresh().await)?;

    if let Some(query) = args.search {
        store.set_search_query(query);
    }
    let students = store.visible_students();

    if args.json {
        return output::json_pretty(&students);
    }

    if students.is_empty() {
        eprintln!("{}", "No students found.".dimmed());
        return Ok(());
    }

    for student in &students {
        output::student_row(student);
    }

    Ok(())
}

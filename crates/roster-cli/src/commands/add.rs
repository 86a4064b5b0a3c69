//! Add student command implementation.

use anyhow::Result;
use clap::Args;

use roster_core::Student;

use super::{CliStore, report};
use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Department
    #[arg(long)]
    pub department: String,

    /// Student number
    #[arg(long)]
    pub student_number: String,

    /// Avatar image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

impl AddArgs {
    fn into_draft(self) -> Student {
        let draft = Student::draft(
            self.first_name,
            self.last_name,
            self.email,
            self.department,
            self.student_number,
        );
        match self.image_url {
            Some(url) => draft.with_image_url(url),
            None => draft,
        }
    }
}

pub async fn run(store: &CliStore, args: AddArgs) -> Result<()> {
    let created = report(store, store.create(args.into_draft()).await)?;

    let id = created.id.map(|id| id.to_string()).unwrap_or_default();
    output::success(&format!("Created student {}", id));
    output::student_details(&created);

    Ok(())
}

//! Update student command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use roster_core::{Student, StudentId};

use super::{CliStore, report};
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Student id
    pub id: String,

    /// New first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// New last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New department
    #[arg(long)]
    pub department: Option<String>,

    /// New student number
    #[arg(long)]
    pub student_number: Option<String>,

    /// Avatar image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

impl UpdateArgs {
    fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.student_number.is_none()
            && self.image_url.is_none()
    }

    /// Overlay the given fields on a copy of `current`.
    fn apply(self, current: Student) -> Student {
        Student {
            first_name: self.first_name.unwrap_or(current.first_name),
            last_name: self.last_name.unwrap_or(current.last_name),
            email: self.email.unwrap_or(current.email),
            department: self.department.unwrap_or(current.department),
            student_number: self.student_number.unwrap_or(current.student_number),
            image_url: self.image_url.or(current.image_url),
            ..current
        }
    }
}

pub async fn run(store: &CliStore, args: UpdateArgs) -> Result<()> {
    let id: StudentId = args.id.parse().context("Invalid student id")?;
    if args.is_empty() {
        bail!("Nothing to update; pass at least one field flag");
    }

    let current = report(store, store.get(id).await)?;
    let updated = report(store, store.update(args.apply(current)).await)?;

    output::success(&format!("Updated student {}", id));
    output::student_details(&updated);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overlays_only_given_fields() {
        let current = Student::draft("John", "Doe", "john@x.com", "Eng", "S1")
            .with_id(StudentId::new(1).unwrap());
        let args = UpdateArgs {
            id: "1".to_string(),
            first_name: None,
            last_name: None,
            email: Some("jd@x.com".to_string()),
            department: None,
            student_number: None,
            image_url: None,
        };
        assert!(!args.is_empty());

        let merged = args.apply(current.clone());
        assert_eq!(merged.email, "jd@x.com");
        assert_eq!(merged.first_name, "John");
        assert_eq!(merged.id, current.id);
    }
}

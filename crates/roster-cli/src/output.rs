//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use roster_core::Student;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one line per student: avatar, id, name, email, department, number.
pub fn student_row(student: &Student) {
    let id = student
        .id
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "#-".to_string());
    let avatar = match &student.image_url {
        Some(_) => "[img]".to_string(),
        None => format!("[{}]", student.initials()),
    };
    println!(
        "{} {} {}  {}  {}  {}",
        avatar.cyan(),
        id.dimmed(),
        student.full_name().bold(),
        student.email,
        student.department,
        student.student_number.dimmed()
    );
}

/// Print every field of a student.
pub fn student_details(student: &Student) {
    if let Some(id) = student.id {
        field("ID", &id.to_string());
    }
    field("Name", &student.full_name());
    field("Email", &student.email);
    field("Department", &student.department);
    field("Student number", &student.student_number);
    match &student.image_url {
        Some(url) => field("Image", url),
        None => field("Avatar", &student.initials()),
    }
    if let Some(created) = &student.created_at {
        field("Created", created);
    }
    if let Some(updated) = &student.updated_at {
        field("Updated", updated);
    }
}

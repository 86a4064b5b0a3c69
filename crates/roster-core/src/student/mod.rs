//! The student record and its client-side rules.

mod search;

pub use search::filter;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InvalidInputError;
use crate::types::StudentId;
use crate::Result;

/// A student record as exchanged with the server.
///
/// Serialized as a flat camelCase JSON object. Absent optional fields are
/// omitted on output; an `id` of `0` on input is read as "not yet persisted".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server-assigned identifier; absent for drafts.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_id"
    )]
    pub id: Option<StudentId>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub student_number: String,

    /// Opaque server timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "created")]
    pub created_at: Option<String>,

    /// Opaque server timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "lastUpdated")]
    pub updated_at: Option<String>,

    /// Avatar image; when absent the initials are shown instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<Option<StudentId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        None | Some(0) => Ok(None),
        Some(value) => StudentId::new(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Student {
    /// Build an unsaved draft from dialog input.
    pub fn draft(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        student_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.into(),
            student_number: student_number.into(),
            created_at: None,
            updated_at: None,
            image_url: None,
        }
    }

    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy carrying the given avatar URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns a copy without the id, as sent in create requests.
    pub fn as_draft(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    /// Returns true once the server has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Check the fields the add and edit dialogs require.
    ///
    /// First name, last name and student number must not be blank. Email and
    /// department are accepted as given.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("student number", &self.student_number),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(InvalidInputError::BlankField { field }.into());
            }
        }
        Ok(())
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Fallback avatar text: the upper-cased first letters of both names.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

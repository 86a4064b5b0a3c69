//! Observable store state and the intents that change it.

use std::collections::HashSet;

use tracing::warn;

use crate::student::{self, Student};
use crate::types::StudentId;

/// A snapshot of everything the presentation layer renders.
///
/// Snapshots are values: the store never edits one in place but publishes a
/// replacement, so a subscriber always sees a consistent set of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// Server-confirmed records in server order. Every entry carries an id.
    pub students: Vec<Student>,
    /// True while an operation is in flight.
    pub is_loading: bool,
    /// Message of the most recent failure, cleared when an operation starts.
    pub error_message: Option<String>,
    /// Current search text; filters [`visible_students`](Self::visible_students).
    pub search_query: String,
}

impl StoreState {
    /// Records matching the search query, in list order.
    pub fn visible_students(&self) -> Vec<&Student> {
        student::filter(&self.students, &self.search_query)
    }

    /// Look up a record by id.
    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == Some(id))
    }

    pub(crate) fn loading(&self) -> Self {
        Self {
            is_loading: true,
            error_message: None,
            ..self.clone()
        }
    }

    pub(crate) fn idle(&self) -> Self {
        Self {
            is_loading: false,
            ..self.clone()
        }
    }

    pub(crate) fn failed(&self, message: String) -> Self {
        Self {
            error_message: Some(message),
            ..self.clone()
        }
    }

    pub(crate) fn with_students(&self, students: Vec<Student>) -> Self {
        Self {
            students,
            ..self.clone()
        }
    }

    /// Append a created record, or replace the entry already holding its id.
    pub(crate) fn with_created(&self, created: Student) -> Self {
        let mut students = self.students.clone();
        match students.iter().position(|s| s.id == created.id) {
            Some(index) => students[index] = created,
            None => students.push(created),
        }
        self.with_students(students)
    }

    /// Replace the entry with the same id; unknown ids leave the list as is.
    pub(crate) fn with_updated(&self, updated: Student) -> Self {
        let students = self
            .students
            .iter()
            .map(|s| {
                if s.id.is_some() && s.id == updated.id {
                    updated.clone()
                } else {
                    s.clone()
                }
            })
            .collect();
        self.with_students(students)
    }

    pub(crate) fn without(&self, id: StudentId) -> Self {
        let students = self
            .students
            .iter()
            .filter(|s| s.id != Some(id))
            .cloned()
            .collect();
        self.with_students(students)
    }
}

/// Keep the server's list order but drop entries without an id and repeats
/// of an id already kept.
pub(crate) fn listed(students: Vec<Student>) -> Vec<Student> {
    let mut seen = HashSet::new();
    students
        .into_iter()
        .filter(|student| match student.id {
            Some(id) if seen.insert(id) => true,
            Some(id) => {
                warn!(id = %id, "dropping duplicate student from server list");
                false
            }
            None => {
                warn!(
                    student_number = %student.student_number,
                    "dropping student without an id from server list"
                );
                false
            }
        })
        .collect()
}

/// A user request, as forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Reload the whole list.
    Refresh,
    /// Submit a draft.
    Create(Student),
    /// Submit an edited copy of an existing record.
    Update(Student),
    /// Delete by id.
    Delete(StudentId),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(id: u64, number: &str) -> Student {
        Student::draft("First", "Last", "e@x.com", "Dept", number)
            .with_id(StudentId::new(id).unwrap())
    }

    #[test]
    fn loading_clears_error() {
        let state = StoreState::default().failed("boom".to_string()).loading();
        assert!(state.is_loading);
        assert_eq!(state.error_message, None);
        assert!(!state.idle().is_loading);
    }

    #[test]
    fn created_record_with_known_id_replaces_entry() {
        let state = StoreState::default()
            .with_students(vec![saved(1, "S1"), saved(2, "S2")])
            .with_created(saved(2, "S2-new"));
        let numbers: Vec<_> = state.students.iter().map(|s| s.student_number.as_str()).collect();
        assert_eq!(numbers, vec!["S1", "S2-new"]);
    }

    #[test]
    fn update_keeps_order_and_ignores_unknown_id() {
        let base = StoreState::default().with_students(vec![saved(1, "S1"), saved(2, "S2")]);

        let updated = base.with_updated(saved(1, "S1-edited"));
        let numbers: Vec<_> = updated.students.iter().map(|s| s.student_number.as_str()).collect();
        assert_eq!(numbers, vec!["S1-edited", "S2"]);

        assert_eq!(base.with_updated(saved(9, "S9")), base);
    }

    #[test]
    fn without_removes_only_matching_id() {
        let state = StoreState::default()
            .with_students(vec![saved(1, "S1"), saved(2, "S2")])
            .without(StudentId::new(1).unwrap());
        assert_eq!(state.students, vec![saved(2, "S2")]);
    }

    #[test]
    fn listed_drops_idless_and_repeated_ids() {
        let students = listed(vec![
            Student::draft("No", "Id", "n@x.com", "Dept", "S0"),
            saved(3, "S3"),
            saved(1, "S1"),
            saved(3, "S3-again"),
        ]);
        assert_eq!(students, vec![saved(3, "S3"), saved(1, "S1")]);
    }

    #[test]
    fn visible_students_follow_search_query() {
        let mut state = StoreState::default().with_students(vec![saved(1, "S1"), saved(2, "X2")]);
        state.search_query = "x2".to_string();
        assert_eq!(state.visible_students(), vec![&saved(2, "X2")]);
        assert!(state.find(StudentId::new(1).unwrap()).is_some());
    }
}

//! Search filtering for the student list.

use super::Student;

impl Student {
    /// Check whether this record matches a free-text search query.
    ///
    /// Matching is a case-insensitive substring test against the names, the
    /// full name, email, department and student number. A blank query
    /// matches every record.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let full_name = self.full_name();
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            full_name.as_str(),
            self.email.as_str(),
            self.department.as_str(),
            self.student_number.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter a list down to the records matching `query`, keeping order.
pub fn filter<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    students.iter().filter(|s| s.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Student> {
        vec![
            Student::draft("John", "Doe", "john@x.com", "Engineering", "S1"),
            Student::draft("Jane", "Roe", "jane@y.org", "Biology", "S2"),
            Student::draft("Max", "Payne", "max@x.com", "Engineering", "A77"),
        ]
    }

    #[test]
    fn blank_query_matches_everything() {
        assert_eq!(filter(&roster(), "").len(), 3);
        assert_eq!(filter(&roster(), "   ").len(), 3);
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let students = roster();
        let by_name: Vec<_> = filter(&students, "jOHN")
            .iter()
            .map(|s| s.student_number.as_str())
            .collect();
        assert_eq!(by_name, vec!["S1"]);

        assert_eq!(filter(&students, "engineering").len(), 2);
        assert_eq!(filter(&students, "y.org").len(), 1);
        assert_eq!(filter(&students, "a77").len(), 1);
        assert_eq!(filter(&students, "jane roe").len(), 1);
        assert!(filter(&students, "nobody").is_empty());
    }
}

//! Repository trait.

use async_trait::async_trait;

use crate::Result;
use crate::student::Student;
use crate::types::StudentId;

/// Uniform success-or-failure access to the student collection.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fetch every student.
    async fn list(&self) -> Result<Vec<Student>>;

    /// Fetch one student.
    async fn get(&self, id: StudentId) -> Result<Student>;

    /// Create a student and return the server's copy.
    async fn create(&self, student: &Student) -> Result<Student>;

    /// Replace the student with the same id and return the server's copy.
    async fn update(&self, student: &Student) -> Result<Student>;

    /// Delete a student.
    async fn delete(&self, id: StudentId) -> Result<()>;
}

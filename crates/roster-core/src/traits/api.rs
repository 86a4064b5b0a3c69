//! Remote client trait.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::student::Student;
use crate::types::StudentId;

/// The raw outcome of one HTTP exchange.
///
/// Remote clients report what the server said without judging it; deciding
/// whether a status or a missing body is a failure is the repository's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body, if the server sent one.
    pub body: Option<T>,
    /// Raw body text of a non-2xx reply, if any.
    pub error_text: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A reply in the 2xx range.
    pub fn success(status: u16, body: Option<T>) -> Self {
        Self {
            status,
            body,
            error_text: None,
        }
    }

    /// A reply outside the 2xx range.
    pub fn failure(status: u16, error_text: Option<String>) -> Self {
        Self {
            status,
            body: None,
            error_text,
        }
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the student REST collection.
///
/// One method per endpoint; each is a single network round trip with no
/// caching and no retry.
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// `GET /api/student`
    async fn list_students(&self) -> Result<ApiResponse<Vec<Student>>, TransportError>;

    /// `GET /api/student/{id}`
    async fn get_student(&self, id: StudentId) -> Result<ApiResponse<Student>, TransportError>;

    /// `POST /api/student`; the id of `student` is never sent.
    async fn create_student(
        &self,
        student: &Student,
    ) -> Result<ApiResponse<Student>, TransportError>;

    /// `PUT /api/student/{id}`
    async fn update_student(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<ApiResponse<Student>, TransportError>;

    /// `DELETE /api/student/{id}`
    async fn delete_student(&self, id: StudentId) -> Result<ApiResponse<()>, TransportError>;
}

//! Repository over a remote student API.
//!
//! Every call goes through the same normalization:
//!
//! 1. a transport failure becomes [`Error::Transport`];
//! 2. a non-2xx status becomes [`Error::Http`] carrying the status code;
//! 3. a 2xx reply without the expected body becomes [`Error::EmptyBody`];
//! 4. anything else is a success with the decoded value.
//!
//! Nothing here retries.

use async_trait::async_trait;
use tracing::{instrument, trace};

use crate::error::{Error, HttpStatusError, InvalidInputError, Operation, TransportError};
use crate::student::Student;
use crate::traits::{ApiResponse, StudentApi, StudentRepository};
use crate::types::StudentId;
use crate::Result;

/// A [`StudentRepository`] backed by any [`StudentApi`].
#[derive(Debug, Clone)]
pub struct ApiRepository<A> {
    api: A,
}

impl<A: StudentApi> ApiRepository<A> {
    /// Wrap a remote client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the wrapped remote client.
    pub fn api(&self) -> &A {
        &self.api
    }
}

/// Reject transport failures and non-2xx replies.
fn check_status<T>(
    operation: Operation,
    outcome: std::result::Result<ApiResponse<T>, TransportError>,
) -> Result<ApiResponse<T>> {
    let response = outcome?;
    trace!(%operation, status = response.status, "student API response");

    if response.is_success() {
        Ok(response)
    } else {
        Err(HttpStatusError::new(operation, response.status, response.error_text).into())
    }
}

/// Normalize a call whose reply must carry a body.
fn expect_body<T>(
    operation: Operation,
    outcome: std::result::Result<ApiResponse<T>, TransportError>,
) -> Result<T> {
    check_status(operation, outcome)?
        .body
        .ok_or(Error::EmptyBody { operation })
}

#[async_trait]
impl<A: StudentApi> StudentRepository for ApiRepository<A> {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Student>> {
        expect_body(Operation::ListStudents, self.api.list_students().await)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: StudentId) -> Result<Student> {
        expect_body(Operation::GetStudent, self.api.get_student(id).await)
    }

    #[instrument(skip(self, student))]
    async fn create(&self, student: &Student) -> Result<Student> {
        let draft = student.as_draft();
        expect_body(Operation::CreateStudent, self.api.create_student(&draft).await)
    }

    #[instrument(skip(self, student), fields(id = ?student.id))]
    async fn update(&self, student: &Student) -> Result<Student> {
        let id = student
            .id
            .ok_or(InvalidInputError::MissingId { action: "updated" })?;
        expect_body(
            Operation::UpdateStudent,
            self.api.update_student(id, student).await,
        )
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: StudentId) -> Result<()> {
        check_status(Operation::DeleteStudent, self.api.delete_student(id).await)?;
        Ok(())
    }
}

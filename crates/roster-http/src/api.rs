//! reqwest-backed implementation of the student API.

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use roster_core::{ApiResponse, BaseUrl, Error, Student, StudentApi, StudentId, TransportError};

use crate::client::{HttpClient, HttpConfig};

/// A network-backed [`StudentApi`] speaking to `<base>/api/student`.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    base: BaseUrl,
    client: HttpClient,
}

impl HttpStudentApi {
    /// Create a client with default transport settings.
    pub fn new(base: BaseUrl) -> Result<Self, Error> {
        Self::with_config(base, &HttpConfig::default())
    }

    /// Create a client with explicit transport settings.
    pub fn with_config(base: BaseUrl, config: &HttpConfig) -> Result<Self, Error> {
        let client = HttpClient::new(config)?;
        Ok(Self { base, client })
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn list_students(&self) -> Result<ApiResponse<Vec<Student>>, TransportError> {
        self.client
            .send::<(), _>(Method::GET, &self.base.collection_url(), None)
            .await
    }

    #[instrument(skip(self), fields(base = %self.base))]
    async fn get_student(&self, id: StudentId) -> Result<ApiResponse<Student>, TransportError> {
        self.client
            .send::<(), _>(Method::GET, &self.base.item_url(id), None)
            .await
    }

    #[instrument(skip(self, student), fields(base = %self.base))]
    async fn create_student(
        &self,
        student: &Student,
    ) -> Result<ApiResponse<Student>, TransportError> {
        let draft = student.as_draft();
        self.client
            .send(Method::POST, &self.base.collection_url(), Some(&draft))
            .await
    }

    #[instrument(skip(self, student), fields(base = %self.base))]
    async fn update_student(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<ApiResponse<Student>, TransportError> {
        self.client
            .send(Method::PUT, &self.base.item_url(id), Some(student))
            .await
    }

    #[instrument(skip(self), fields(base = %self.base))]
    async fn delete_student(&self, id: StudentId) -> Result<ApiResponse<()>, TransportError> {
        self.client
            .send_no_content(Method::DELETE, &self.base.item_url(id))
            .await
    }
}

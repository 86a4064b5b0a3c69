//! In-process student API.
//!
//! [`MemoryStudentApi`] answers the same calls as the REST server from a
//! map held in memory. It assigns ids, stamps timestamps and answers 404 for
//! unknown ids. Faults and latency can be injected to exercise the failure
//! and in-flight paths of callers without a network.

use std::collections::{BTreeMap, VecDeque};
use std::num::NonZeroU64;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::error::TransportError;
use crate::student::Student;
use crate::traits::{ApiResponse, StudentApi};
use crate::types::StudentId;

/// Timestamp layout used by the student server.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A failure to serve instead of the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Reply with this non-2xx status.
    Status(u16),
    /// Reply 200 without a body.
    EmptyBody,
    /// Fail before any reply.
    Transport(TransportError),
}

/// Memory-backed [`StudentApi`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStudentApi {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    students: BTreeMap<StudentId, Student>,
    last_id: u64,
    faults: VecDeque<Fault>,
    latency: Duration,
    requests: usize,
}

impl MemoryStudentApi {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding `students`, assigning ids to drafts.
    pub fn with_students(students: impl IntoIterator<Item = Student>) -> Self {
        let api = Self::new();
        {
            let mut inner = api.lock();
            for student in students {
                inner.insert(student);
            }
        }
        api
    }

    /// Serve `fault` instead of the next request. Faults queue up in order.
    pub fn fail_next(&self, fault: Fault) {
        self.lock().faults.push_back(fault);
    }

    /// Delay every reply by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.lock().latency = latency;
    }

    /// Returns the stored students in id order.
    pub fn students(&self) -> Vec<Student> {
        self.lock().students.values().cloned().collect()
    }

    /// Returns how many requests reached the collection.
    pub fn request_count(&self) -> usize {
        self.lock().requests
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the request, wait out the latency and take the next fault.
    async fn begin(&self) -> Option<Fault> {
        let latency = {
            let mut inner = self.lock();
            inner.requests += 1;
            inner.latency
        };
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        self.lock().faults.pop_front()
    }
}

impl MemoryInner {
    fn next_id(&mut self) -> StudentId {
        let id = StudentId::from(NonZeroU64::MIN.saturating_add(self.last_id));
        self.last_id = id.get();
        id
    }

    fn insert(&mut self, mut student: Student) -> Student {
        let id = match student.id {
            Some(id) => {
                self.last_id = self.last_id.max(id.get());
                id
            }
            None => self.next_id(),
        };
        student.id = Some(id);
        self.students.insert(id, student.clone());
        student
    }
}

fn now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

fn not_found<T>(id: StudentId) -> ApiResponse<T> {
    ApiResponse::failure(404, Some(format!("student {} not found", id)))
}

fn injected<T>(fault: Fault) -> Result<ApiResponse<T>, TransportError> {
    debug!(?fault, "serving injected fault");
    match fault {
        Fault::Status(status) => Ok(ApiResponse::failure(
            status,
            Some("injected failure".to_string()),
        )),
        Fault::EmptyBody => Ok(ApiResponse::success(200, None)),
        Fault::Transport(err) => Err(err),
    }
}

#[async_trait]
impl StudentApi for MemoryStudentApi {
    async fn list_students(&self) -> Result<ApiResponse<Vec<Student>>, TransportError> {
        if let Some(fault) = self.begin().await {
            return injected(fault);
        }
        Ok(ApiResponse::success(200, Some(self.students())))
    }

    async fn get_student(&self, id: StudentId) -> Result<ApiResponse<Student>, TransportError> {
        if let Some(fault) = self.begin().await {
            return injected(fault);
        }
        Ok(match self.lock().students.get(&id) {
            Some(student) => ApiResponse::success(200, Some(student.clone())),
            None => not_found(id),
        })
    }

    async fn create_student(
        &self,
        student: &Student,
    ) -> Result<ApiResponse<Student>, TransportError> {
        if let Some(fault) = self.begin().await {
            return injected(fault);
        }
        let stamp = now();
        let created = self.lock().insert(Student {
            id: None,
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
            ..student.clone()
        });
        debug!(id = ?created.id, "created student");
        Ok(ApiResponse::success(200, Some(created)))
    }

    async fn update_student(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<ApiResponse<Student>, TransportError> {
        if let Some(fault) = self.begin().await {
            return injected(fault);
        }
        let mut inner = self.lock();
        let Some(existing) = inner.students.get(&id) else {
            return Ok(not_found(id));
        };
        let updated = Student {
            id: Some(id),
            created_at: existing.created_at.clone(),
            updated_at: Some(now()),
            ..student.clone()
        };
        inner.students.insert(id, updated.clone());
        Ok(ApiResponse::success(200, Some(updated)))
    }

    async fn delete_student(&self, id: StudentId) -> Result<ApiResponse<()>, TransportError> {
        if let Some(fault) = self.begin().await {
            return injected(fault);
        }
        Ok(match self.lock().students.remove(&id) {
            Some(_) => ApiResponse::success(200, None),
            None => not_found(id),
        })
    }
}

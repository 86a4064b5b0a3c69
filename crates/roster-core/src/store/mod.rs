//! The student state store.
//!
//! [`StudentStore`] holds the authoritative in-memory list together with the
//! loading and error flags, and publishes them as one [`StoreState`] value
//! through a [`watch`] channel. Every public operation follows the same
//! protocol:
//!
//! 1. publish `is_loading = true` and clear the error;
//! 2. call the repository;
//! 3. on success reconcile the list (replace, append, replace by id or
//!    remove by id), on failure publish the error message and keep the list;
//! 4. publish `is_loading = false`, even if the operation is dropped midway.
//!
//! Operations are not queued against each other. Two operations in flight at
//! once each apply their list reconciliation to the latest state, but the
//! loading flag and error message are last-write-wins.

mod state;

pub use state::{Intent, StoreState};

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::error::{Error, InvalidInputError};
use crate::student::Student;
use crate::traits::StudentRepository;
use crate::types::StudentId;
use crate::Result;

/// State container mediating every change to the student list.
///
/// Cloning is cheap and every clone shares the same state and tasks.
pub struct StudentStore<R> {
    inner: Arc<StoreInner<R>>,
}

struct StoreInner<R> {
    repository: R,
    state: watch::Sender<StoreState>,
    /// Number of dispatched tasks that have not finished.
    in_flight: watch::Sender<usize>,
    /// Cancelled once by `shutdown`; dispatched tasks race against it.
    closed: CancellationToken,
}

impl<R> Clone for StudentStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> std::fmt::Debug for StudentStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudentStore")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Publish `next(current)` as the new state.
fn publish(state: &watch::Sender<StoreState>, next: impl FnOnce(&StoreState) -> StoreState) {
    state.send_modify(|current| *current = next(current));
}

/// Clears the loading flag when the operation ends, however it ends.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<StoreState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        publish(self.state, StoreState::idle);
    }
}

/// Counts a dispatched task until it ends, including by cancellation.
struct InFlightGuard<'a> {
    count: &'a watch::Sender<usize>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.count.send_modify(|n| *n = n.saturating_sub(1));
    }
}

impl<R: StudentRepository> StudentStore<R> {
    /// Create a store with an empty list.
    pub fn new(repository: R) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        let (in_flight, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                repository,
                state,
                in_flight,
                closed: CancellationToken::new(),
            }),
        }
    }

    /// Returns the repository this store mediates.
    pub fn repository(&self) -> &R {
        &self.inner.repository
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.inner.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.state.borrow().clone()
    }

    /// Returns the records matching the current search query.
    pub fn visible_students(&self) -> Vec<Student> {
        self.inner
            .state
            .borrow()
            .visible_students()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Set the search text used by [`visible_students`](Self::visible_students).
    pub fn set_search_query(&self, query: impl Into<String>) {
        let search_query = query.into();
        publish(&self.inner.state, |state| StoreState {
            search_query,
            ..state.clone()
        });
    }

    /// Dismiss the current error message.
    pub fn clear_error(&self) {
        publish(&self.inner.state, |state| StoreState {
            error_message: None,
            ..state.clone()
        });
    }

    /// Returns true once [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.inner.closed.is_cancelled()
    }

    /// Replace the list with the server's.
    ///
    /// Entries without an id and repeats of an id already listed are dropped.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<()> {
        let _loading = self.begin();
        match self.inner.repository.list().await {
            Ok(students) => {
                let students = state::listed(students);
                debug!(count = students.len(), "refreshed student list");
                publish(&self.inner.state, |state| state.with_students(students));
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Fetch one record without touching the list.
    #[instrument(skip(self))]
    pub async fn get(&self, id: StudentId) -> Result<Student> {
        let _loading = self.begin();
        self.inner
            .repository
            .get(id)
            .await
            .map_err(|err| self.fail(err))
    }

    /// Submit a draft and append the server's copy to the list.
    #[instrument(skip(self, draft), fields(student_number = %draft.student_number))]
    pub async fn create(&self, draft: Student) -> Result<Student> {
        let _loading = self.begin();
        if let Err(err) = draft.validate() {
            return Err(self.fail(err));
        }

        let created = match self.inner.repository.create(&draft).await {
            Ok(created) if created.is_persisted() => created,
            Ok(_) => {
                let err = InvalidInputError::Other {
                    message: "server returned the created student without an id".to_string(),
                };
                return Err(self.fail(err.into()));
            }
            Err(err) => return Err(self.fail(err)),
        };

        debug!(id = ?created.id, "created student");
        publish(&self.inner.state, |state| state.with_created(created.clone()));
        Ok(created)
    }

    /// Submit an edited record and replace the list entry with its id.
    #[instrument(skip(self, student), fields(id = ?student.id))]
    pub async fn update(&self, student: Student) -> Result<Student> {
        let _loading = self.begin();
        if let Err(err) = student.validate() {
            return Err(self.fail(err));
        }

        match self.inner.repository.update(&student).await {
            Ok(updated) => {
                debug!("updated student");
                publish(&self.inner.state, |state| state.with_updated(updated.clone()));
                Ok(updated)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Delete by id and remove the list entry.
    ///
    /// A non-2xx reply, including 404 for an already deleted record, is a
    /// failure and leaves the list unchanged.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: StudentId) -> Result<()> {
        let _loading = self.begin();
        match self.inner.repository.delete(id).await {
            Ok(()) => {
                debug!("deleted student");
                publish(&self.inner.state, |state| state.without(id));
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Delete a record; a draft without an id is ignored.
    pub async fn delete_student(&self, student: &Student) -> Result<()> {
        match student.id {
            Some(id) => self.delete(id).await,
            None => Ok(()),
        }
    }

    /// Run one intent to completion.
    pub async fn apply(&self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Refresh => self.refresh().await,
            Intent::Create(draft) => self.create(draft).await.map(drop),
            Intent::Update(student) => self.update(student).await.map(drop),
            Intent::Delete(id) => self.delete(id).await,
        }
    }

    fn begin(&self) -> LoadingGuard<'_> {
        publish(&self.inner.state, StoreState::loading);
        LoadingGuard {
            state: &self.inner.state,
        }
    }

    fn fail(&self, err: Error) -> Error {
        warn!(error = %err, "student operation failed");
        let message = err.to_string();
        publish(&self.inner.state, |state| state.failed(message));
        err
    }
}

impl<R: StudentRepository + 'static> StudentStore<R> {
    /// Run an intent as a task owned by the store.
    ///
    /// The outcome is only visible through the published state. Owned tasks
    /// keep running until they finish or [`shutdown`](Self::shutdown) cancels
    /// them. After shutdown this does nothing.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn dispatch(&self, intent: Intent) {
        if self.is_shut_down() {
            debug!(?intent, "store is shut down, dropping intent");
            return;
        }
        let store = self.clone();
        let closed = self.inner.closed.clone();
        self.inner.in_flight.send_modify(|n| *n += 1);
        tokio::spawn(async move {
            let _in_flight = InFlightGuard {
                count: &store.inner.in_flight,
            };
            tokio::select! {
                biased;
                _ = closed.cancelled() => debug!("student operation cancelled"),
                _ = store.apply(intent) => {}
            }
        });
    }

    /// Wait for every dispatched task to finish.
    pub async fn wait_idle(&self) {
        let mut in_flight = self.inner.in_flight.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = in_flight.wait_for(|n| *n == 0).await;
    }

    /// Cancel every dispatched task and refuse new ones.
    ///
    /// Cancelled operations leave the list as it was and clear the loading
    /// flag. A request already on the wire may still reach the server.
    pub async fn shutdown(&self) {
        let pending = *self.inner.in_flight.borrow();
        if pending > 0 {
            debug!(count = pending, "cancelling in-flight student operations");
        }
        self.inner.closed.cancel();
        self.wait_idle().await;
    }
}

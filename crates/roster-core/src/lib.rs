//! roster-core - Core types, repository contract and state store.
//!
//! The crate is organised in layers, leaves first:
//!
//! - [`Student`] is the record exchanged with the server.
//! - [`StudentApi`] is the remote client contract: one method per REST call,
//!   returning the raw HTTP outcome as an [`ApiResponse`].
//! - [`StudentRepository`] turns those outcomes into a uniform [`Result`];
//!   [`ApiRepository`] is the implementation over any [`StudentApi`].
//! - [`StudentStore`] owns the authoritative list plus loading and error
//!   flags, publishes them to subscribers and mediates every mutation.
//!
//! # Example
//!
//! ```
//! use roster_core::{ApiRepository, MemoryStudentApi, Student, StudentStore};
//!
//! # async fn example() {
//! let store = StudentStore::new(ApiRepository::new(MemoryStudentApi::new()));
//! store
//!     .create(Student::draft("John", "Doe", "john@x.com", "Eng", "S1"))
//!     .await
//!     .unwrap();
//!
//! let state = store.snapshot();
//! assert_eq!(state.students.len(), 1);
//! assert!(!state.is_loading);
//! assert!(state.error_message.is_none());
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod repository;
pub mod store;
pub mod student;
pub mod traits;
pub mod types;

pub use error::{Error, HttpStatusError, InvalidInputError, Operation, TransportError};
pub use memory::MemoryStudentApi;
pub use repository::ApiRepository;
pub use store::{Intent, StoreState, StudentStore};
pub use student::Student;
pub use traits::{ApiResponse, StudentApi, StudentRepository};
pub use types::{BaseUrl, StudentId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! roster-http - HTTP-backed student API client.
//!
//! ```no_run
//! use roster_core::{ApiRepository, BaseUrl, StudentStore};
//! use roster_http::HttpStudentApi;
//!
//! # async fn example() -> Result<(), roster_core::Error> {
//! let base = BaseUrl::new("http://localhost:8080")?;
//! let store = StudentStore::new(ApiRepository::new(HttpStudentApi::new(base)?));
//! store.refresh().await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;

pub use api::HttpStudentApi;
pub use client::HttpConfig;

//! Core traits for remote client and repository behavior.

mod api;
mod repository;

pub use api::{ApiResponse, StudentApi};
pub use repository::StudentRepository;

//! Validated identifier and address types.
//!
//! These types check their invariants at construction time, so a value that
//! exists is always usable in a request.

mod base_url;
mod student_id;

pub use base_url::BaseUrl;
pub use student_id::StudentId;

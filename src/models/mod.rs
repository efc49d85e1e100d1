pub mod admin;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod students;
pub mod users;

pub use common::{DataEnvelope, ErrorBody, PagedResult};

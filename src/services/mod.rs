//! # Service Layer
//!
//! Business-facing operations between the HTTP handlers and the repository,
//! owning the existence checks and failure translation.

pub mod employee;

pub use employee::{EmployeeInput, EmployeeService};

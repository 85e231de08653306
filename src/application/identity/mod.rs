//! Identity module — account administration
//!
//! Contains the `AccountService` which orchestrates the admin lifecycle and
//! role-tagging use-cases.

pub mod report;
pub mod service;

pub use report::{AssignmentOutcome, BatchReport};
pub use service::{AccountService, CreatedAdmin};

pub mod identity;

pub use identity::{AccountService, AssignmentOutcome, BatchReport, CreatedAdmin};

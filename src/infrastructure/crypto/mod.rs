pub mod jwt;

pub use jwt::{create_assertion, AssertionClaims, IDENTITY_SCOPES};

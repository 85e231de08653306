//! Account aggregate
//!
//! Contains the Account entity, its claims bundle, the create DTO, and the
//! identity provider interface.

pub mod claims;
pub mod model;
pub mod provider;

mod dto_create;

pub use claims::{ClaimsBundle, DEPARTMENT_CLAIM, MAX_CLAIMS_PAYLOAD_BYTES, ROLE_CLAIM};
pub use model::{Account, Role};

pub use dto_create::CreateAdminDto;

pub use provider::IdentityProvider;

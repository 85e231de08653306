//! Infrastructure layer - external concerns

pub mod credentials;
pub mod crypto;
pub mod identity_toolkit;
pub mod memory;

pub use credentials::ServiceAccountKey;
pub use identity_toolkit::IdentityToolkitClient;
pub use memory::InMemoryIdentityProvider;

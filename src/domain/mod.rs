pub mod account;
pub mod contractor;

// Re-export commonly used types
pub use account::{Account, ClaimsBundle, CreateAdminDto, IdentityProvider, Role};
pub use contractor::{default_registry, ContractorAssignment};

// Re-export errors from support for convenience
pub use crate::support::errors::{AppError, AppResult, ErrorKind, ProviderError, ProviderResult};

use async_trait::async_trait;

use super::{Account, ClaimsBundle};
use crate::support::errors::ProviderResult;

/// Account and claims operations offered by the identity provider.
///
/// One implementation is built at process start and handed to the services
/// that need it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and return its uid.
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<String>;

    async fn delete_account(&self, uid: &str) -> ProviderResult<()>;

    async fn lookup_account_by_email(&self, email: &str) -> ProviderResult<Option<Account>>;
    async fn get_account(&self, uid: &str) -> ProviderResult<Option<Account>>;

    /// Replace the account's custom claims with `claims`.
    ///
    /// This is an overwrite, not a merge: any claim missing from `claims` is
    /// removed from the account.
    async fn set_claims(&self, uid: &str, claims: &ClaimsBundle) -> ProviderResult<()>;
}

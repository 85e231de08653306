//! In-memory identity provider

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{Account, ClaimsBundle, IdentityProvider, ProviderError, ProviderResult};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
struct StoredAccount {
    email: Option<String>,
    claims: ClaimsBundle,
    disabled: bool,
}

/// In-memory identity provider for development and testing.
///
/// Mirrors the remote service's observable rules: unique lowercase emails,
/// a six character password floor and overwrite-on-write claims.
pub struct InMemoryIdentityProvider {
    accounts: DashMap<String, StoredAccount>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Seed an account without going through `create_account`.
    pub fn insert_account(&self, uid: impl Into<String>, email: &str) {
        self.accounts.insert(
            uid.into(),
            StoredAccount {
                email: Some(email.to_lowercase()),
                claims: ClaimsBundle::new(),
                disabled: false,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn to_account(uid: &str, stored: &StoredAccount) -> Account {
        Account {
            uid: uid.to_string(),
            email: stored.email.clone(),
            claims: stored.claims.clone(),
            disabled: stored.disabled,
        }
    }

    fn user_not_found() -> ProviderError {
        ProviderError::api(400, "USER_NOT_FOUND", "")
    }
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<String> {
        let email = email.to_lowercase();
        if !email.contains('@') {
            return Err(ProviderError::api(400, "INVALID_EMAIL", ""));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ProviderError::api(
                400,
                "WEAK_PASSWORD",
                "Password should be at least 6 characters",
            ));
        }
        if self
            .accounts
            .iter()
            .any(|entry| entry.email.as_deref() == Some(email.as_str()))
        {
            return Err(ProviderError::api(400, "EMAIL_EXISTS", ""));
        }

        let uid = uuid::Uuid::new_v4().simple().to_string();
        self.accounts.insert(
            uid.clone(),
            StoredAccount {
                email: Some(email),
                claims: ClaimsBundle::new(),
                disabled: false,
            },
        );
        Ok(uid)
    }

    async fn delete_account(&self, uid: &str) -> ProviderResult<()> {
        self.accounts
            .remove(uid)
            .map(|_| ())
            .ok_or_else(Self::user_not_found)
    }

    async fn lookup_account_by_email(&self, email: &str) -> ProviderResult<Option<Account>> {
        let email = email.to_lowercase();
        Ok(self
            .accounts
            .iter()
            .find(|entry| entry.email.as_deref() == Some(email.as_str()))
            .map(|entry| Self::to_account(entry.key(), entry.value())))
    }

    async fn get_account(&self, uid: &str) -> ProviderResult<Option<Account>> {
        Ok(self
            .accounts
            .get(uid)
            .map(|entry| Self::to_account(uid, entry.value())))
    }

    async fn set_claims(&self, uid: &str, claims: &ClaimsBundle) -> ProviderResult<()> {
        let mut entry = self.accounts.get_mut(uid).ok_or_else(Self::user_not_found)?;
        entry.claims = claims.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let provider = InMemoryIdentityProvider::new();
        let uid = provider
            .create_account("Admin@Example.com", "temp123")
            .await
            .unwrap();

        let account = provider
            .lookup_account_by_email("admin@example.COM")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.uid, uid);
        assert_eq!(account.email.as_deref(), Some("admin@example.com"));
        assert!(account.claims.is_empty());
    }

    #[tokio::test]
    async fn test_provider_side_rules() {
        let provider = InMemoryIdentityProvider::new();

        let weak = provider.create_account("a@example.com", "123").await.unwrap_err();
        assert_eq!(weak.code(), Some("WEAK_PASSWORD"));

        provider.create_account("a@example.com", "123456").await.unwrap();
        let dup = provider.create_account("A@example.com", "123456").await.unwrap_err();
        assert_eq!(dup.code(), Some("EMAIL_EXISTS"));

        let missing = provider.delete_account("nope").await.unwrap_err();
        assert_eq!(missing.code(), Some("USER_NOT_FOUND"));
        assert_eq!(provider.len(), 1);
    }
}

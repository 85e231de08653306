//! Custom claims attached to an account.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Role;
use crate::support::errors::{AppError, AppResult};

pub const ROLE_CLAIM: &str = "role";
pub const DEPARTMENT_CLAIM: &str = "department";

/// Serialized claims larger than this are refused by the provider.
pub const MAX_CLAIMS_PAYLOAD_BYTES: usize = 1000;

/// Names the provider reserves for its own ID token fields.
const RESERVED_CLAIMS: [&str; 16] = [
    "acr", "amr", "at_hash", "aud", "auth_time", "azp", "cnf", "c_hash", "exp", "firebase",
    "iat", "iss", "jti", "nbf", "nonce", "sub",
];

/// Full set of custom claims for one account.
///
/// Writing a bundle replaces whatever the account carried before. Keys that
/// are not repeated in the new bundle are dropped, so callers that want to
/// keep an existing claim must include it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimsBundle(BTreeMap<String, String>);

impl ClaimsBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{role: "admin"}`
    pub fn admin() -> Self {
        Self::new().with(ROLE_CLAIM, Role::Admin.as_str())
    }

    /// `{role: "contractor", department: <department>}`
    pub fn contractor(department: impl Into<String>) -> Self {
        Self::new()
            .with(ROLE_CLAIM, Role::Contractor.as_str())
            .with(DEPARTMENT_CLAIM, department)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn role(&self) -> Option<Role> {
        self.get(ROLE_CLAIM).and_then(Role::parse)
    }

    pub fn department(&self) -> Option<&str> {
        self.get(DEPARTMENT_CLAIM)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Parse the provider's `customAttributes` string.
    ///
    /// Claims written by other tools may hold non-string JSON values; those
    /// are kept in their JSON text form.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        let values: BTreeMap<String, serde_json::Value> = serde_json::from_str(raw)?;
        let claims = values
            .into_iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect();
        Ok(Self(claims))
    }

    /// Reject bundles the provider would refuse, before any call is made.
    pub fn check(&self) -> AppResult<()> {
        if let Some(key) = self.0.keys().find(|k| RESERVED_CLAIMS.contains(&k.as_str())) {
            return Err(AppError::Validation(format!(
                "claim \"{}\" is reserved and cannot be set",
                key
            )));
        }

        let payload = self
            .to_json()
            .map_err(|e| AppError::Validation(format!("claims are not serializable: {}", e)))?;
        if payload.len() > MAX_CLAIMS_PAYLOAD_BYTES {
            return Err(AppError::Validation(format!(
                "claims payload is {} bytes, limit is {}",
                payload.len(),
                MAX_CLAIMS_PAYLOAD_BYTES
            )));
        }
        Ok(())
    }
}

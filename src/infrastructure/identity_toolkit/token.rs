//! Bearer tokens for the Identity Toolkit API

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::EncodingKey;
use tokio::sync::Mutex;
use tracing::debug;

use super::wire::{api_error, TokenResponse};
use crate::domain::{ProviderError, ProviderResult};
use crate::infrastructure::credentials::ServiceAccountKey;
use crate::infrastructure::crypto::jwt::{create_assertion, IDENTITY_SCOPES};

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Tokens are refreshed this long before the endpoint says they expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Token the local auth emulator accepts for admin calls.
pub const EMULATOR_TOKEN: &str = "owner";

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Utc::now() + Duration::seconds(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

pub enum TokenSource {
    ServiceAccount {
        key: ServiceAccountKey,
        encoding_key: EncodingKey,
        cached: Mutex<Option<CachedToken>>,
    },
    Emulator,
}

impl TokenSource {
    pub fn service_account(key: ServiceAccountKey, encoding_key: EncodingKey) -> Self {
        Self::ServiceAccount {
            key,
            encoding_key,
            cached: Mutex::new(None),
        }
    }

    /// Current bearer token, exchanging a fresh assertion when the cached
    /// one is missing or about to expire.
    pub async fn bearer(&self, http: &reqwest::Client) -> ProviderResult<String> {
        match self {
            Self::Emulator => Ok(EMULATOR_TOKEN.to_string()),
            Self::ServiceAccount {
                key,
                encoding_key,
                cached,
            } => {
                let mut cached = cached.lock().await;
                if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
                    return Ok(token.value.clone());
                }

                let token = exchange(http, key, encoding_key).await?;
                let value = token.value.clone();
                *cached = Some(token);
                Ok(value)
            }
        }
    }
}

async fn exchange(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
    encoding_key: &EncodingKey,
) -> ProviderResult<CachedToken> {
    let assertion = create_assertion(key, encoding_key, IDENTITY_SCOPES)?;

    debug!(token_uri = %key.token_uri, "Exchanging service account assertion");
    let resp = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        let err = api_error(status.as_u16(), &body);
        return Err(ProviderError::Token(err.to_string()));
    }

    let parsed: TokenResponse = serde_json::from_str(&body)?;
    if parsed.access_token.is_empty() {
        return Err(ProviderError::Token("empty access_token".into()));
    }

    Ok(CachedToken {
        value: parsed.access_token,
        expires_at: Utc::now() + Duration::seconds(parsed.expires_in),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_margin() {
        let soon = CachedToken {
            value: "t".into(),
            expires_at: Utc::now() + Duration::seconds(EXPIRY_MARGIN_SECS / 2),
        };
        assert!(!soon.is_fresh());

        let later = CachedToken {
            value: "t".into(),
            expires_at: Utc::now() + Duration::seconds(3600),
        };
        assert!(later.is_fresh());
    }

    #[tokio::test]
    async fn test_emulator_needs_no_exchange() {
        let http = reqwest::Client::new();
        assert_eq!(TokenSource::Emulator.bearer(&http).await.unwrap(), "owner");
    }
}

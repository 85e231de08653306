//! Service account JWT assertions

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::infrastructure::credentials::ServiceAccountKey;

/// OAuth2 scopes requested for account administration.
pub const IDENTITY_SCOPES: &str = "https://www.googleapis.com/auth/cloud-platform \
    https://www.googleapis.com/auth/firebase \
    https://www.googleapis.com/auth/identitytoolkit \
    https://www.googleapis.com/auth/userinfo.email";

/// Lifetime of an assertion; the token endpoint accepts at most one hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the self-signed assertion exchanged for an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssertionClaims {
    /// Issuer (service account email)
    pub iss: String,
    /// Space separated scopes
    pub scope: String,
    /// Audience (token endpoint)
    pub aud: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AssertionClaims {
    pub fn new(key: &ServiceAccountKey, scope: &str) -> Self {
        let now = Utc::now();
        let exp = now + Duration::seconds(ASSERTION_LIFETIME_SECS);

        Self {
            iss: key.client_email.clone(),
            scope: scope.to_string(),
            aud: key.token_uri.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Sign an RS256 assertion for `key`.
pub fn create_assertion(
    key: &ServiceAccountKey,
    encoding_key: &EncodingKey,
    scope: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = AssertionClaims::new(key, scope);

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    encode(&header, &claims, encoding_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
    use std::path::Path;

    const KEY_JSON: &str = include_str!("../../../tests/fixtures/service_account.json");
    const PUBLIC_PEM: &str = include_str!("../../../tests/fixtures/service_account_public.pem");

    #[test]
    fn test_assertion_verifies_with_public_key() {
        let key = ServiceAccountKey::from_json(KEY_JSON, Path::new("fixture")).unwrap();
        let token = create_assertion(&key, &key.encoding_key().unwrap(), IDENTITY_SCOPES).unwrap();

        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some("3f1c0ffee0ddba11"));

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[key.token_uri.as_str()]);
        validation.set_issuer(&[key.client_email.as_str()]);
        let data = decode::<AssertionClaims>(
            &token,
            &DecodingKey::from_rsa_pem(PUBLIC_PEM.as_bytes()).unwrap(),
            &validation,
        )
        .unwrap();

        assert_eq!(data.claims.exp - data.claims.iat, ASSERTION_LIFETIME_SECS);
        assert!(data.claims.scope.contains("identitytoolkit"));
        assert!(!data.claims.is_expired());
    }
}

//! Request and response bodies of the Identity Toolkit v1 account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::{Account, ClaimsBundle, ProviderError};

#[derive(Debug, Serialize)]
pub struct CreateAccountRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub local_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountRequest<'a> {
    pub local_id: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub local_id: Vec<&'a str>,
}

/// `users` is absent, not empty, when nothing matched.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub custom_attributes: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl UserRecord {
    pub fn into_account(self) -> Result<Account, ProviderError> {
        let claims = match self.custom_attributes.as_deref() {
            Some(raw) => ClaimsBundle::from_json(raw)?,
            None => ClaimsBundle::new(),
        };
        Ok(Account {
            uid: self.local_id,
            email: self.email,
            claims,
            disabled: self.disabled,
        })
    }
}

/// `customAttributes` travels as a JSON document inside a string field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetClaimsRequest<'a> {
    pub local_id: &'a str,
    pub custom_attributes: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Turn a failed response body into a [`ProviderError::Api`].
///
/// The service reports errors as `{"error": {"message": "CODE : detail"}}`;
/// the detail part is optional.
pub fn api_error(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            let message = envelope.error.message;
            match message.split_once(" : ") {
                Some((code, detail)) => ProviderError::api(status, code.trim(), detail.trim()),
                None => ProviderError::api(status, message.trim(), ""),
            }
        }
        _ => {
            let detail: String = body.trim().chars().take(200).collect();
            ProviderError::api(status, format!("HTTP_{}", status), detail)
        }
    }
}

/// Successful body of the OAuth2 token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_detail() {
        let body = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters","errors":[]}}"#;
        let err = api_error(400, body);
        assert_eq!(err.code(), Some("WEAK_PASSWORD"));
        assert!(err.to_string().ends_with("Password should be at least 6 characters"));
    }

    #[test]
    fn test_api_error_plain_code_and_garbage() {
        assert_eq!(
            api_error(400, r#"{"error":{"message":"EMAIL_EXISTS"}}"#).code(),
            Some("EMAIL_EXISTS")
        );
        let err = api_error(503, "<html>upstream unavailable</html>");
        assert_eq!(err.code(), Some("HTTP_503"));
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn test_lookup_without_users() {
        let resp: LookupResponse = serde_json::from_str(r#"{"kind":"identitytoolkit#GetAccountInfoResponse"}"#).unwrap();
        assert!(resp.users.is_empty());
    }

    #[test]
    fn test_user_record_claims() {
        let resp: LookupResponse = serde_json::from_str(
            r#"{"users":[{"localId":"u1","email":"a@example.com","customAttributes":"{\"role\":\"admin\"}"}]}"#,
        )
        .unwrap();
        let account = resp.users.into_iter().next().unwrap().into_account().unwrap();
        assert_eq!(account.uid, "u1");
        assert_eq!(account.claims, ClaimsBundle::admin());
        assert!(!account.disabled);
    }

    #[test]
    fn test_lookup_request_shape() {
        let req = LookupRequest {
            email: vec!["a@example.com"],
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"email":["a@example.com"]}"#);
    }
}

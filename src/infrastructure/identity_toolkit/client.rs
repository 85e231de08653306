use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use super::token::TokenSource;
use super::wire::{
    api_error, CreateAccountRequest, CreateAccountResponse, DeleteAccountRequest, LookupRequest,
    LookupResponse, SetClaimsRequest,
};
use crate::config::ProviderConfig;
use crate::domain::{Account, ClaimsBundle, IdentityProvider, ProviderResult};
use crate::infrastructure::credentials::ServiceAccountKey;
use crate::support::errors::ConfigError;

/// Identity Toolkit v1 REST client.
///
/// Holds one HTTP connection pool and one token source for the lifetime of
/// the process. Operations never change the client's own settings.
pub struct IdentityToolkitClient {
    http: reqwest::Client,
    accounts_url: String,
    project_id: String,
    tokens: TokenSource,
}

impl IdentityToolkitClient {
    /// Build a client from configuration.
    ///
    /// The service account key is loaded and checked here, so a missing or
    /// broken key stops the process before any account is touched. Against
    /// an emulator the key is optional as long as a project id is configured.
    pub fn connect(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        match config.emulator_host.as_deref().filter(|h| !h.is_empty()) {
            Some(host) => {
                let project_id = match &config.project_id {
                    Some(id) if !id.is_empty() => id.clone(),
                    _ if config.credentials_path.exists() => {
                        ServiceAccountKey::load(&config.credentials_path)?.project_id
                    }
                    _ => return Err(ConfigError::Missing("provider.project_id")),
                };
                let base = format!("http://{}/identitytoolkit.googleapis.com", host);
                info!(host, project_id = %project_id, "Using auth emulator");
                Ok(Self::new(http, &base, project_id, TokenSource::Emulator))
            }
            None => {
                let key = ServiceAccountKey::load(&config.credentials_path)?;
                let encoding_key =
                    key.encoding_key()
                        .map_err(|e| ConfigError::InvalidCredentials {
                            path: config.credentials_path.clone(),
                            reason: e.to_string(),
                        })?;
                let project_id = config
                    .project_id
                    .clone()
                    .unwrap_or_else(|| key.project_id.clone());
                info!(
                    project_id = %project_id,
                    client_email = %key.client_email,
                    "Loaded service account credentials"
                );
                Ok(Self::new(
                    http,
                    &config.api_base_url,
                    project_id,
                    TokenSource::service_account(key, encoding_key),
                ))
            }
        }
    }

    pub fn new(http: reqwest::Client, base_url: &str, project_id: String, tokens: TokenSource) -> Self {
        let accounts_url = format!(
            "{}/v1/projects/{}/accounts",
            base_url.trim_end_matches('/'),
            project_id
        );
        Self {
            http,
            accounts_url,
            project_id,
            tokens,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn accounts_url(&self) -> &str {
        &self.accounts_url
    }

    pub fn is_emulated(&self) -> bool {
        matches!(self.tokens, TokenSource::Emulator)
    }

    /// POST `body` to `accounts{action}` and decode the reply.
    async fn call<Req, Resp>(&self, action: &str, body: &Req) -> ProviderResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.accounts_url, action);
        let bearer = self.tokens.bearer(&self.http).await?;

        let resp = self
            .http
            .post(&url)
            .bearer_auth(bearer)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(%url, status = status.as_u16(), "Identity Toolkit call");

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn lookup(&self, request: &LookupRequest<'_>) -> ProviderResult<Option<Account>> {
        let resp: LookupResponse = self.call(":lookup", request).await?;
        resp.users
            .into_iter()
            .next()
            .map(|user| user.into_account())
            .transpose()
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<String> {
        let resp: CreateAccountResponse = self
            .call("", &CreateAccountRequest { email, password })
            .await?;
        Ok(resp.local_id)
    }

    async fn delete_account(&self, uid: &str) -> ProviderResult<()> {
        let _: serde_json::Value = self
            .call(":delete", &DeleteAccountRequest { local_id: uid })
            .await?;
        Ok(())
    }

    async fn lookup_account_by_email(&self, email: &str) -> ProviderResult<Option<Account>> {
        self.lookup(&LookupRequest {
            email: vec![email],
            ..Default::default()
        })
        .await
    }

    async fn get_account(&self, uid: &str) -> ProviderResult<Option<Account>> {
        self.lookup(&LookupRequest {
            local_id: vec![uid],
            ..Default::default()
        })
        .await
    }

    async fn set_claims(&self, uid: &str, claims: &ClaimsBundle) -> ProviderResult<()> {
        let request = SetClaimsRequest {
            local_id: uid,
            custom_attributes: claims.to_json()?,
        };
        let _: serde_json::Value = self.call(":update", &request).await?;
        Ok(())
    }
}

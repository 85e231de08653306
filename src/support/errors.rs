use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification reported to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    NotFound,
    Provider,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid service account key {}: {reason}", .path.display())]
    InvalidCredentials { path: PathBuf, reason: String },

    #[error("Missing setting: {0}")]
    Missing(&'static str),

    #[error("Cannot build HTTP client: {0}")]
    HttpClient(String),
}

/// Any failure surfaced by the identity provider or the channel to it.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{code} (HTTP {status}){}", detail_suffix(.detail))]
    Api {
        status: u16,
        code: String,
        detail: String,
    },

    #[error("Token exchange failed: {0}")]
    Token(String),

    #[error("Failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {}", detail)
    }
}

impl ProviderError {
    pub fn api(status: u16, code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            detail: detail.into(),
        }
    }

    /// Provider-side error code such as `EMAIL_EXISTS`, if the provider sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The account exists but the follow-up claims update failed.
    /// The account is left in place for manual repair.
    #[error("Account {uid} was created but its role was not assigned: {source}")]
    RoleNotAssigned {
        uid: String,
        #[source]
        source: ProviderError,
    },
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Provider(_) | Self::RoleNotAssigned { .. } => ErrorKind::Provider,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, msg)
                })
            })
            .collect();
        field_errors.sort();

        if field_errors.is_empty() {
            Self::Validation("validation failed".into())
        } else {
            Self::Validation(field_errors.join("; "))
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub type ProviderResult<T> = Result<T, ProviderError>;

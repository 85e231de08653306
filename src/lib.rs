//! # Identity Admin
//!
//! Account lifecycle and role-claim administration against a
//! Firebase-compatible identity provider.
//!
//! ## Architecture
//!
//! - **domain**: Account, claims bundle, contractor registry and the
//!   `IdentityProvider` port
//! - **application**: `AccountService` use-cases
//! - **infrastructure**: Identity Toolkit REST client, service account
//!   credentials, in-memory provider
//! - **interfaces**: interactive menu and batch runner
//! - **config** / **bootstrap**: settings and process startup

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig, LoggingConfig, ProviderConfig};

pub use application::{AccountService, BatchReport, CreatedAdmin};
pub use infrastructure::{IdentityToolkitClient, InMemoryIdentityProvider};

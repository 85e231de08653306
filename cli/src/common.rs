//! Startup shared by both tools: configuration, logging, provider client.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use identity_admin::bootstrap::{connect_provider, init_tracing};
use identity_admin::support::errors::ConfigError;
use identity_admin::{default_config_path, AppConfig, IdentityToolkitClient};

/// Exit status when configuration or credentials are unusable.
pub const EXIT_CONFIG: i32 = 2;

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "IDENTITY_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Service account key file (JSON). Overrides the configuration file.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Project id. Overrides the one in the key file.
    #[arg(long)]
    pub project_id: Option<String>,

    /// Use a local auth emulator at host:port instead of the live service.
    #[arg(long, env = "FIREBASE_AUTH_EMULATOR_HOST")]
    pub emulator_host: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Validate configuration and credentials, then exit.
    #[arg(long)]
    pub check: bool,
}

pub struct Startup {
    pub config_path: PathBuf,
    pub config: AppConfig,
    pub client: IdentityToolkitClient,
}

/// Load configuration, apply CLI overrides, start logging and build the
/// provider client. Any failure here means nothing was sent to the provider.
pub fn startup(args: &CommonArgs) -> Result<Startup, ConfigError> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = AppConfig::load(&config_path)?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);
    info!("Configuration loaded from {}", config_path.display());

    if let Some(ref path) = args.credentials {
        info!("CLI override: credentials = {}", path.display());
        config.provider.credentials_path = path.clone();
    }
    if let Some(ref project_id) = args.project_id {
        info!("CLI override: project_id = {}", project_id);
        config.provider.project_id = Some(project_id.clone());
    }
    if let Some(ref host) = args.emulator_host {
        info!("CLI override: emulator_host = {}", host);
        config.provider.emulator_host = Some(host.clone());
    }

    let client = connect_provider(&config)?;

    Ok(Startup {
        config_path,
        config,
        client,
    })
}

pub fn print_check(startup: &Startup) {
    let provider = &startup.config.provider;
    println!("✅ Configuration is valid");
    println!("   Config file : {}", startup.config_path.display());
    if startup.client.is_emulated() {
        println!("   Credentials : (auth emulator)");
    } else {
        println!("   Credentials : {}", provider.credentials_path.display());
    }
    println!("   Project     : {}", startup.client.project_id());
    println!("   Endpoint    : {}", startup.client.accounts_url());
    println!("   Log level   : {}", startup.config.logging.level);
}

//! Process startup helpers shared by the command-line tools.

use crate::config::{AppConfig, LoggingConfig};
use crate::infrastructure::IdentityToolkitClient;
use crate::support::errors::ConfigError;

/// Initialize tracing (logging) from the logging config.
///
/// Events go to stderr so stdout only carries operator-facing lines.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    match config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Build the provider client once for the whole process.
pub fn connect_provider(config: &AppConfig) -> Result<IdentityToolkitClient, ConfigError> {
    IdentityToolkitClient::connect(&config.provider)
}

//! Admin manager — interactive account tool
//!
//! Creates admin accounts (tagged `{role: "admin"}`) and deletes accounts by
//! email through a small text menu.
//!
//! ```sh
//! # Key file in the current directory
//! admin-manager
//!
//! # Explicit key and config
//! admin-manager --credentials /secure/serviceAccountKey.json --config ./admin.toml
//!
//! # Against a local auth emulator
//! FIREBASE_AUTH_EMULATOR_HOST=127.0.0.1:9099 admin-manager --project-id demo-project
//!
//! # Validate config and key without touching any account
//! admin-manager --check
//! ```

mod common;

use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use identity_admin::interfaces::console::AdminMenu;
use identity_admin::AccountService;

use common::{CommonArgs, EXIT_CONFIG};

/// Create and delete admin accounts interactively.
#[derive(Parser, Debug)]
#[command(name = "admin-manager", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let startup = match common::startup(&cli.common) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.common.check {
        common::print_check(&startup);
        return Ok(());
    }

    let service = AccountService::new(Arc::new(startup.client));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = AdminMenu::new(&service, stdin.lock(), stdout.lock());
    if let Err(e) = menu.run().await {
        error!("Console I/O failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

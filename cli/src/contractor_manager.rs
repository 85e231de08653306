//! Contractor manager — batch role tagging
//!
//! Tags every account in the contractor registry with
//! `{role: "contractor", department: <department>}`. Every entry is attempted;
//! the exit status is 1 when at least one of them failed.
//!
//! ```sh
//! contractor-manager
//! contractor-manager --config ./contractors.toml
//! contractor-manager --dry-run
//! ```

mod common;

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use identity_admin::interfaces::console::{run_contractor_batch, write_plan, write_summary};
use identity_admin::AccountService;

use common::{CommonArgs, EXIT_CONFIG};

/// Exit status when one or more registry entries failed.
const EXIT_PARTIAL_FAILURE: i32 = 1;

/// Assign contractor roles from the registry.
#[derive(Parser, Debug)]
#[command(name = "contractor-manager", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print the assignments that would be made and exit.
    #[arg(long)]
    dry_run: bool,
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

    let registry = startup.config.contractor_registry();
    info!(entries = registry.len(), "Contractor registry loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        write_plan(&mut out, &registry)?;
        return Ok(());
    }

    let service = AccountService::new(Arc::new(startup.client));
    let report = run_contractor_batch(&service, &registry, &mut out).await?;
    write_summary(&mut out, &report)?;
    out.flush()?;

    if report.has_failures() {
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }
    Ok(())
}

//! # Payments Application
//!
//! Binary that wires together all the components:
//! - Load configuration from `.env`, environment and arguments
//! - Initialize logging
//! - Seed the user repository and create the payment service
//! - Run JSON-lines commands from a script or stdin

mod config;
mod runner;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_hex::{BasicValidationService, PaymentService};
use payments_repo::{InMemoryPaymentRepository, InMemoryUserRepository};

use config::{Config, LogFormat};
use runner::Runner;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,payments_app=debug,payments_hex=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only command results.
    match format {
        LogFormat::Plain => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_tracing(config.log_format);

    let users = config.seed_users()?;
    tracing::info!(count = users.len(), "seeding user repository");

    let service = PaymentService::new(
        InMemoryUserRepository::with_users(users),
        InMemoryPaymentRepository::new(),
        BasicValidationService::new(),
    );
    let runner = Runner::new(service);

    let stdout = io::stdout();
    let summary = match &config.commands {
        Some(path) => {
            tracing::info!("Reading commands from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open command script {}", path.display()))?;
            runner.run(BufReader::new(file), stdout.lock())?
        }
        None => runner.run(io::stdin().lock(), stdout.lock())?,
    };

    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        stored = runner.service().payments().len(),
        "finished processing commands"
    );
    Ok(())
}

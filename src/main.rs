use std::fs::OpenOptions;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod comment;
mod config;
mod core;
mod error;
mod oracle;
mod providers;
mod reconciler;

use auth::credentials::{CredentialManager, EnvCredentials};
use config::Config;
use error::Error;
use oracle::IpifyOracle;
use providers::route53::{Route53Client, Route53Config};
use reconciler::{Outcome, Reconciler};

use crate::core::record::RecordKey;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config.log_file) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    info!(
        "starting reconciliation for {} ({}) in zone {}",
        config.record_name, config.record_type, config.zone_id
    );

    let code = match run(&config).await {
        Ok(Outcome::NoChange { address }) => {
            info!("no update needed. IP={address}");
            0
        }
        Ok(Outcome::Updated { previous, current }) => {
            info!("successfully changed record from {previous} to {current}");
            0
        }
        Err(e) => {
            error!("{e}");
            1
        }
    };

    info!("reconciliation cycle finished, shutting down");
    std::process::exit(code);
}

async fn run(config: &Config) -> Result<Outcome, Error> {
    let token = EnvCredentials::new(&config.credential_profile).get("api_token")?;

    let store = Route53Client::new(
        Route53Config {
            api_url: config.api_url.clone(),
            verify_identity: config.verify_identity,
        },
        &token,
    )
    .map_err(|e| Error::Config(e.to_string()))?;

    let oracle = IpifyOracle::new(&config.oracle_url)?;

    let record = RecordKey {
        zone_id: config.zone_id.clone(),
        name: config.record_name.clone(),
        record_type: config.record_type,
    };

    Reconciler::new(oracle, store, record, config.ttl).run().await
}

/// Log to the console and to an append-mode file, both timestamped.
fn init_tracing(log_file: &str) -> Result<(), Error> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| Error::Config(format!("failed to open log file {log_file}: {e}")))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        .init();

    Ok(())
}

use chrono::Local;
use tracing::info;

use crate::comment::format_comment;
use crate::core::provider::{IpOracle, RecordStore};
use crate::core::record::RecordKey;
use crate::error::Error;

/// Terminal result of one reconciliation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoChange { address: String },
    Updated { previous: String, current: String },
}

/// Drives one fetch-compare-update pass. Stateless between invocations; the
/// remote record is the only durable state.
pub struct Reconciler<O, S> {
    oracle: O,
    store: S,
    record: RecordKey,
    ttl: u32,
}

impl<O: IpOracle, S: RecordStore> Reconciler<O, S> {
    pub fn new(oracle: O, store: S, record: RecordKey, ttl: u32) -> Self {
        Self {
            oracle,
            store,
            record,
            ttl,
        }
    }

    /// One cycle: public address, stored value, then at most one upsert.
    /// Any failure ends the cycle; nothing downstream of it runs.
    pub async fn run(&self) -> Result<Outcome, Error> {
        let current = self.oracle.public_ip().await?;
        info!("public address is {current}");

        let stored = self.store.current_value(&self.record).await?;
        info!(
            "record {} ({}) holds {stored}",
            self.record.name, self.record.record_type
        );

        // Exact string comparison; IPv6 representations are not normalized.
        if stored == current {
            return Ok(Outcome::NoChange { address: current });
        }

        let comment = format_comment(&stored, &current, Local::now().naive_local())?;
        info!("submitting change: \"{comment}\"");

        self.store
            .submit_upsert(&self.record, &current, self.ttl, &comment)
            .await?;

        Ok(Outcome::Updated {
            previous: stored,
            current,
        })
    }
}

//! Route 53-style record store client.

pub mod client;
pub mod error;
pub mod types;


pub use client::{Route53Client, Route53Config};
pub use error::Route53Error;

use async_trait::async_trait;

use crate::core::provider::RecordStore;
use crate::core::record::RecordKey;
use crate::error::Error;
use error::{lookup_error, update_error};
use types::ChangeBatch;

// The store returns record names as FQDNs with a trailing root dot.
fn names_match(requested: &str, returned: &str) -> bool {
    requested
        .trim_end_matches('.')
        .eq_ignore_ascii_case(returned.trim_end_matches('.'))
}

#[async_trait]
impl RecordStore for Route53Client {
    async fn current_value(&self, key: &RecordKey) -> Result<String, Error> {
        let response = self
            .list_record_sets(&key.zone_id, &key.name, key.record_type.as_str())
            .await
            .map_err(lookup_error)?;

        let Some(record_set) = response.resource_record_sets.into_iter().next() else {
            return Err(Error::RecordNotFound(format!(
                "no record sets returned for {} ({})",
                key.name, key.record_type
            )));
        };

        // The list call starts *at* (name, type); without verification the
        // first result is trusted even when it is the next record in the
        // zone. That matches the historical behavior.
        if self.config.verify_identity
            && (!names_match(&key.name, &record_set.name)
                || record_set.record_type != key.record_type.as_str())
        {
            return Err(Error::RecordNotFound(format!(
                "store returned {} ({}) instead of {} ({})",
                record_set.name, record_set.record_type, key.name, key.record_type
            )));
        }

        record_set
            .resource_records
            .into_iter()
            .next()
            .map(|record| record.value)
            .ok_or_else(|| {
                Error::RecordNotFound(format!("record set {} carries no values", key.name))
            })
    }

    async fn submit_upsert(
        &self,
        key: &RecordKey,
        value: &str,
        ttl: u32,
        comment: &str,
    ) -> Result<(), Error> {
        let batch = ChangeBatch::upsert(key, value, ttl, comment);
        self.change_record_sets(&key.zone_id, batch)
            .await
            .map_err(update_error)
    }
}

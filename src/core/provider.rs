use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::core::record::RecordKey;
use crate::error::Error;

/// One lookup of this machine's public address against an external oracle.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IpOracle: Send + Sync {
    async fn public_ip(&self) -> Result<String, Error>;
}

/// Read and upsert operations against the authoritative record store.
/// Implementations receive an already-authenticated transport; credential
/// resolution happens elsewhere.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Current value held by the record addressed by `key`.
    async fn current_value(&self, key: &RecordKey) -> Result<String, Error>;

    /// Submit a single UPSERT change batch for the record addressed by `key`.
    async fn submit_upsert(
        &self,
        key: &RecordKey,
        value: &str,
        ttl: u32,
        comment: &str,
    ) -> Result<(), Error>;
}

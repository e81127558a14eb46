use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use tracing::debug;

use crate::providers::route53::error::Route53Error;
use crate::providers::route53::types::{
    ApiError, ChangeBatch, ChangeRecordSetsRequest, ListResourceRecordSetsResponse,
};

pub struct Route53Config {
    pub api_url: String,
    pub verify_identity: bool,
}

/// HTTP client for a Route 53-style record-management API. Holds an
/// already-resolved bearer token; it never touches credential storage.
pub struct Route53Client {
    pub(super) config: Route53Config,
    client: Client,
}

impl Route53Client {
    pub fn new(config: Route53Config, token: &str) -> Result<Self, Route53Error> {
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Route53Error::Credential("token is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { config, client })
    }

    /// List record sets starting at (name, type), capped at one result. The
    /// API's start-at semantics return the next record in the zone when no
    /// exact match exists; callers decide whether to verify the identity.
    pub async fn list_record_sets(
        &self,
        zone_id: &str,
        name: &str,
        record_type: &str,
    ) -> Result<ListResourceRecordSetsResponse, Route53Error> {
        let url = format!("{}/hostedzone/{}/rrset", self.config.api_url, zone_id);
        debug!("listing record sets at {name} ({record_type})");

        let response = self
            .client
            .get(url)
            .query(&[("name", name), ("type", record_type), ("maxitems", "1")])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            _ => Err(api_error(response).await),
        }
    }

    /// Submit one change batch. A 200-class status means the batch was
    /// accepted, not that it has propagated.
    pub async fn change_record_sets(
        &self,
        zone_id: &str,
        batch: ChangeBatch,
    ) -> Result<(), Route53Error> {
        let url = format!("{}/hostedzone/{}/rrset", self.config.api_url, zone_id);
        debug!("submitting change batch for zone {zone_id}");

        let response = self
            .client
            .post(url)
            .json(&ChangeRecordSetsRequest {
                change_batch: batch,
            })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }
}

async fn api_error(response: reqwest::Response) -> Route53Error {
    let status = response.status();
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        code: status.to_string(),
        message: "unknown error".to_string(),
    });
    error.into()
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::provider::IpOracle;
use crate::error::Error;

/// Queries an ipify-style endpoint whose response body is the bare address
/// literal, no envelope. One attempt per invocation, no retry.
pub struct IpifyOracle {
    client: Client,
    url: String,
}

impl IpifyOracle {
    pub fn new(url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Oracle(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl IpOracle for IpifyOracle {
    async fn public_ip(&self) -> Result<String, Error> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Oracle(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::Oracle(e.to_string()))?;

        let ip = body.trim();
        if ip.is_empty() {
            return Err(Error::Oracle(format!("empty response from {}", self.url)));
        }

        Ok(ip.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_public_ip_returns_trimmed_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body("1.2.3.4\n");
            })
            .await;

        let oracle = IpifyOracle::new(&server.url("/")).unwrap();
        let result = oracle.public_ip().await;

        mock.assert_async().await;
        assert_eq!(assert_ok!(result), "1.2.3.4");
    }

    #[tokio::test]
    async fn test_public_ip_empty_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body("");
            })
            .await;

        let oracle = IpifyOracle::new(&server.url("/")).unwrap();
        let err = oracle.public_ip().await.unwrap_err();

        assert_matches!(err, Error::Oracle(_));
    }

    #[tokio::test]
    async fn test_public_ip_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(500);
            })
            .await;

        let oracle = IpifyOracle::new(&server.url("/")).unwrap();
        let err = oracle.public_ip().await.unwrap_err();

        assert_matches!(err, Error::Oracle(_));
    }

    #[tokio::test]
    async fn test_public_ip_connection_refused() {
        // Port 9 is the discard service; nothing listens there in CI.
        let oracle = IpifyOracle::new("http://127.0.0.1:9/").unwrap();
        let err = oracle.public_ip().await.unwrap_err();

        assert_matches!(err, Error::Oracle(_));
    }
}

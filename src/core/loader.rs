use crate::core::{DataSource, PortfolioData};
use crate::utils::error::{FolioError, Result};
use reqwest::Client;

/// Fetches the portfolio payload with a single GET. No retries, no timeout.
pub struct HttpDataSource {
    endpoint: String,
    client: Client,
}

impl HttpDataSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self) -> Result<PortfolioData> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FolioError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: PortfolioData = serde_json::from_str(&body)?;

        tracing::info!(
            "Loaded portfolio: {} experience entries, {} work items",
            data.experience.len(),
            data.work.len()
        );
        Ok(data)
    }
}

#[async_trait::async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<PortfolioData> {
        self.request().await.inspect_err(|e| {
            tracing::error!(
                "Error fetching data from {}: {} (category: {:?})",
                self.endpoint,
                e,
                e.category()
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_defaults_missing_keys() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/exec");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "work": [{ "title": "X" }] }));
        });

        let source = HttpDataSource::new(server.url("/exec"));
        let data = source.fetch().await.unwrap();

        mock.assert();
        assert_eq!(data.profile.name, None);
        assert!(data.experience.is_empty());
        assert_eq!(data.work.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/exec");
            then.status(404);
        });

        let err = HttpDataSource::new(server.url("/exec"))
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(err, FolioError::HttpStatusError { status: 404 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/exec");
            then.status(200).body("<html>not json</html>");
        });

        let err = HttpDataSource::new(server.url("/exec"))
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(err, FolioError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Nothing listens on port 9 on the loopback interface.
        let err = HttpDataSource::new("http://127.0.0.1:9/exec")
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(err, FolioError::NetworkError(_)));
    }
}

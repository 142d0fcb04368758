//! Outbound HTTP client using wreq for TLS fingerprint emulation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wreq::redirect::Policy;
use wreq::Client;
use wreq_util::Emulation;

/// Total request timeout. A constant, not configuration-derived.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirects to follow before giving up.
const MAX_REDIRECTS: usize = 5;

/// Trait for fetching marketplace pages - enables stubbing for tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs a GET and returns the response body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP client with browser impersonation to reduce bot-detection responses.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the fixed timeout and redirect limits.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "max-age=0")
            .header("Sec-Ch-Ua", "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"131\"")
            .header("Sec-Ch-Ua-Mobile", "?0")
            .header("Sec-Ch-Ua-Platform", "\"Windows\"")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Sec-Fetch-User", "?1")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;

        let html = r#"
            <html><body>
                <div class="s-result-item" data-asin="B0TEST">
                    <h2><a class="a-link-normal" href="/dp/B0TEST">Test Product</a></h2>
                </div>
            </body></html>
        "#;

        Mock::given(method("GET"))
            .and(path("/s"))
            .and(query_param("k", "test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.fetch(&format!("{}/s?k=test", mock_server.uri())).await;

        assert!(result.is_ok());
        let body = result.unwrap();
        assert!(body.contains("Test Product"));
        assert!(body.contains("B0TEST"));
    }

    #[tokio::test]
    async fn test_fetch_sends_impersonation_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .and(wiremock::matchers::header("Sec-Fetch-Mode", "navigate"))
            .and(wiremock::matchers::header("Upgrade-Insecure-Requests", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.fetch(&format!("{}/page", mock_server.uri())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_error_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.fetch(&format!("{}/missing", mock_server.uri())).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_error_503() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/blocked"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.fetch(&format!("{}/blocked", mock_server.uri())).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let client = HttpClient::new().unwrap();
        let result = client.fetch("http://127.0.0.1:1/unreachable").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.fetch(&format!("{}/empty", mock_server.uri())).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}

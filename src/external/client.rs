use std::time::Duration;

use crate::config::StorefrontConfig;
use crate::error::{AppError, AppResult};

/// Builds the shared HTTP client for storefront calls.
///
/// One client is built at startup and reused for every request, so TCP
/// and TLS connections are pooled across handlers.
///
/// # Features
/// - **Compression**: gzip, deflate, brotli and zstd
/// - **Timeouts**: whole-request and connect timeouts from `[storefront]`
/// - **User-Agent**: fixed desktop browser string from `[storefront]`
pub fn build_http_client(config: &StorefrontConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| AppError::Configuration {
            key: "storefront".to_string(),
            source: anyhow::Error::new(e).context("failed to build HTTP client"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_builds_from_defaults() {
        assert!(build_http_client(&StorefrontConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_client_sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ua"))
            .and(header("user-agent", "aso-test-agent"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = StorefrontConfig {
            user_agent: "aso-test-agent".to_string(),
            ..Default::default()
        };
        let client = build_http_client(&config).unwrap();
        let response = client
            .get(format!("{}/ua", server.uri()))
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
    }
}

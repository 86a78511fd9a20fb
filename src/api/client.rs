//! RTMS HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::api::pagination::{PageEnvelope, PaginationScheme};
use crate::config::api;
use crate::error::{Result, RtmsError};

/// RTMS API client
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone)]
pub struct RtmsClient {
    client: Client,
    api_key: String,
    base_url: String,
    scheme: PaginationScheme,
    max_empty_pages: u32,
    stream_buffer: usize,
}

impl RtmsClient {
    /// Create a new client for `host`
    ///
    /// `host` may be a bare hostname or a full URL; `https://` is added when
    /// no scheme is given and the `/v1` API prefix is appended when missing.
    pub fn new(api_key: &str, host: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(RtmsError::Config("API key cannot be empty".to_string()));
        }
        if host.is_empty() {
            return Err(RtmsError::Config("host cannot be empty".to_string()));
        }

        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: normalize_base_url(host),
            scheme: PaginationScheme::default(),
            max_empty_pages: api::MAX_EMPTY_PAGES,
            stream_buffer: api::STREAM_BUFFER,
        })
    }

    /// Use a different pagination scheme for list endpoints
    pub fn with_scheme(mut self, scheme: PaginationScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set how many consecutive empty pages a stream tolerates
    pub fn with_max_empty_pages(mut self, max_empty_pages: u32) -> Self {
        self.max_empty_pages = max_empty_pages.max(1);
        self
    }

    /// Set the capacity of the item queue used by streams
    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity.max(1);
        self
    }

    /// Base URL all endpoints are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn scheme(&self) -> &PaginationScheme {
        &self.scheme
    }

    pub(crate) fn max_empty_pages(&self) -> u32 {
        self.max_empty_pages
    }

    pub(crate) fn stream_buffer(&self) -> usize {
        self.stream_buffer
    }

    /// Build a full URL from an endpoint and query parameters
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push(if endpoint.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }
        url
    }

    /// Create a GET request builder with standard headers
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(api::AUTH_HEADER, &self.api_key)
            .header("Content-Type", "application/json")
    }

    /// GET an endpoint and return the raw body, failing on non-2xx statuses
    async fn get_body(&self, endpoint: &str, params: &[(String, String)]) -> Result<Vec<u8>> {
        let url = self.build_url(endpoint, params);
        debug!("Request: GET {}", url);

        let response = self.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("Response status {} ({} bytes)", status.as_u16(), body.len());

        if !status.is_success() {
            return Err(RtmsError::Remote {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }

    /// Fetch a single resource and decode it as a dynamic JSON value
    pub async fn get_json(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let body = self.get_body(endpoint, params).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the page of `endpoint` starting at `offset`
    pub async fn fetch_page(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        offset: usize,
        page_size: usize,
    ) -> Result<PageEnvelope> {
        let mut query = params.to_vec();
        for (key, value) in self.scheme.query_pairs(offset, page_size) {
            query.retain(|(k, _)| *k != key);
            query.push((key, value));
        }

        let body = self.get_body(endpoint, &query).await?;
        self.scheme.decode_page(&body, offset, page_size)
    }
}

/// Add a scheme and the API version prefix to a host when missing
fn normalize_base_url(host: &str) -> String {
    let with_scheme = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };
    let trimmed = with_scheme.trim_end_matches('/');
    if trimmed.ends_with(api::BASE_PATH) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, api::BASE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_from_bare_host() {
        let client = RtmsClient::new("key", "rtms.example.com").unwrap();
        assert_eq!(client.base_url(), "https://rtms.example.com/v1");
    }

    #[test]
    fn test_base_url_keeps_scheme_and_version() {
        let client = RtmsClient::new("key", "http://localhost:8080/v1/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = RtmsClient::new("", "rtms.example.com").err().unwrap();
        assert!(matches!(err, RtmsError::Config(_)));
    }

    #[test]
    fn test_empty_host_rejected() {
        let err = RtmsClient::new("key", "").err().unwrap();
        assert!(matches!(err, RtmsError::Config(_)));
    }

    #[test]
    fn test_build_url_encodes_params() {
        let client = RtmsClient::new("key", "rtms.example.com").unwrap();
        let url = client.build_url(
            "/tickets",
            &[("filter".to_string(), "status=open&x".to_string())],
        );
        assert_eq!(
            url,
            "https://rtms.example.com/v1/tickets?filter=status%3Dopen%26x"
        );
    }

    #[test]
    fn test_build_url_with_existing_query() {
        let client = RtmsClient::new("key", "rtms.example.com").unwrap();
        let url = client.build_url("/hosts?all=1", &[("page".to_string(), "2".to_string())]);
        assert!(url.ends_with("/hosts?all=1&page=2"));
    }

    #[test]
    fn test_builder_clamps_limits() {
        let client = RtmsClient::new("key", "h.example.com")
            .unwrap()
            .with_max_empty_pages(0)
            .with_stream_buffer(0);
        assert_eq!(client.max_empty_pages(), 1);
        assert_eq!(client.stream_buffer(), 1);
    }

    #[tokio::test]
    async fn test_get_json_sends_auth_header() {
        let mock_server = MockServer::start().await;
        let client = RtmsClient::new("secret", &mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/v1/users/whoami"))
            .and(header("X-AUTH-TOKEN", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 7})))
            .mount(&mock_server)
            .await;

        let value = client.get_json("/users/whoami", &[]).await.unwrap();
        assert_eq!(value["id"], 7);
    }

    #[tokio::test]
    async fn test_get_json_remote_error_keeps_body() {
        let mock_server = MockServer::start().await;
        let client = RtmsClient::new("secret", &mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/v1/hosts/42"))
            .respond_with(ResponseTemplate::new(404).set_body_string("host not found"))
            .mount(&mock_server)
            .await;

        match client.get_json("/hosts/42", &[]).await.unwrap_err() {
            RtmsError::Remote { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "host not found");
            }
            other => panic!("Expected RtmsError::Remote, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_network_error() {
        // Nothing listens on port 9 of the loopback interface
        let client = RtmsClient::new("secret", "http://127.0.0.1:9").unwrap();
        let err = client.get_json("/tickets", &[]).await.unwrap_err();
        assert!(matches!(err, RtmsError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_page_overrides_caller_pagination_params() {
        let mock_server = MockServer::start().await;
        let client = RtmsClient::new("secret", &mock_server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/v1/tickets"))
            .and(query_param("page", "3"))
            .and(query_param("itemsPerPage", "5"))
            .and(query_param("status", "open"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [1],
                "pagination": {"total": 11}
            })))
            .mount(&mock_server)
            .await;

        let params = vec![
            ("status".to_string(), "open".to_string()),
            ("page".to_string(), "99".to_string()),
        ];
        let page = client.fetch_page("/tickets", &params, 10, 5).await.unwrap();
        assert_eq!(page.total_count, 11);
        assert!(page.is_last());
    }
}

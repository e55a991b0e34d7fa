//! Blocking HTTP transport for the ISS API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use moexiss_endpoints::BASE_URL;
use moexiss_types::TransportError;

/// Configuration for the blocking transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL prepended to every endpoint path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Skip TLS certificate verification.
    ///
    /// Defaults to true, matching how the live endpoint is commonly
    /// consumed; set to false to enforce verification.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: String::from(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X x.y; rv:42.0) Gecko/20100101 Firefox/42.0",
            ),
            headers: Vec::new(),
            accept_invalid_certs: true,
        }
    }
}

/// The transport seam: one GET returning a decoded JSON document.
///
/// [`IssClient`] is the production implementation; tests substitute
/// scripted in-memory transports.
pub trait IssTransport {
    /// Issues a GET for the given absolute URL and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] classifying HTTP-status, network, and
    /// malformed-body failures.
    fn get_json(&self, url: &str) -> Result<Value, TransportError>;

    /// Returns the base URL requests against this transport should use.
    fn base_url(&self) -> &str {
        BASE_URL
    }
}

/// Blocking HTTP client for MOEX ISS.
#[derive(Debug)]
pub struct IssClient {
    http: Client,
    config: ClientConfig,
}

impl IssClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "skipping invalid header"),
            }
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .gzip(true)
            .build()?;
        Ok(Self { http, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl IssTransport for IssClient {
    fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let response = self.http.get(url).send().map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
            });
        }
        response
            .json::<Value>()
            .map_err(|error| TransportError::MalformedResponse(error.to_string()))
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

/// Classifies a reqwest error into the transport taxonomy.
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_decode() {
        TransportError::MalformedResponse(error.to_string())
    } else {
        TransportError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.accept_invalid_certs);
        assert!(config.headers.is_empty());
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_client_creation() {
        let client = IssClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_base_url_follows_config() {
        let client = IssClient::new(ClientConfig {
            base_url: String::from("http://localhost:8080/iss"),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/iss");
    }
}

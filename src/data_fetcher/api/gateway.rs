//! Single entry point for every outbound request.
//!
//! The gateway owns the token and base URLs, classifies non-2xx statuses
//! into [`ApiErrorKind`] and hands back parsed JSON. The actual HTTP call
//! sits behind [`Transport`] so request handling can be tested without a
//! network.

use crate::config::Config;
use crate::constants::AUTH_HEADER;
use crate::data_fetcher::api::http_client::create_http_client;
use crate::data_fetcher::api::urls::join_url;
use crate::error::{ApiErrorKind, AppError};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a GET request. Only transport-level failures are errors;
/// HTTP error statuses come back as a normal [`RawResponse`].
pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, AppError>;
}

/// [`Transport`] backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, AppError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(|e| {
            error!("Request failed for URL {url}: {e}");
            AppError::Network(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}

#[derive(Debug)]
pub struct ApiGateway<T: Transport = ReqwestTransport> {
    transport: T,
    api_base_url: String,
    live_url: String,
    api_token: String,
}

impl ApiGateway<ReqwestTransport> {
    /// Builds a gateway with a real HTTP client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client(config.http_timeout_seconds)?;
        Ok(Self::new(
            ReqwestTransport::new(client),
            &config.api_base_url,
            &config.live_url,
            &config.api_token,
        ))
    }
}

impl<T: Transport> ApiGateway<T> {
    pub fn new(
        transport: T,
        api_base_url: impl Into<String>,
        live_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_base_url: api_base_url.into(),
            live_url: live_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Fetches an authenticated scores API endpoint.
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the API base URL
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed body of a 2xx response
    /// * `Err(AppError::Api)` - Classified non-2xx status
    /// * `Err(AppError::Network)` - The request never completed
    /// * `Err(AppError::ApiMalformedJson)` - The body was not JSON
    #[instrument(skip(self))]
    pub fn fetch(&self, path: &str) -> Result<Value, AppError> {
        let url = join_url(&self.api_base_url, path);
        info!("Fetching data from URL: {url}");

        let response = self
            .transport
            .get(&url, &[(AUTH_HEADER, self.api_token.as_str())])?;
        decode(response, &url)
    }

    /// Fetches the unauthenticated live-scores feed and returns its `games`
    /// array.
    #[instrument(skip(self))]
    pub fn fetch_live(&self) -> Result<Vec<Value>, AppError> {
        info!("Fetching live scores from URL: {}", self.live_url);

        let response = self.transport.get(&self.live_url, &[])?;
        match decode(response, &self.live_url)? {
            Value::Object(mut body) => match body.remove("games") {
                Some(Value::Array(games)) => Ok(games),
                _ => Err(AppError::api_unexpected_structure(
                    "live feed has no games array",
                )),
            },
            _ => Err(AppError::api_unexpected_structure(
                "live feed is not a JSON object",
            )),
        }
    }
}

fn decode(response: RawResponse, url: &str) -> Result<Value, AppError> {
    debug!("Response status: {}", response.status);

    if let Some(kind) = ApiErrorKind::from_status(response.status) {
        error!("HTTP {} (URL: {url})", response.status);
        return Err(AppError::api(kind, url));
    }

    debug!("Response length: {} bytes", response.body.len());
    serde_json::from_str(&response.body).map_err(|e| {
        error!("Failed to parse response from URL {url}: {e}");
        AppError::api_malformed_json(e.to_string(), url)
    })
}

mod retrieve;
mod search;

pub use retrieve::normalize_record_url;

use crate::books::query::APPID_PARAM;
use crate::config::ClientConfig;
use crate::error::{CiNiiError, Result};
use reqwest::{Client, Response, Url};
use tracing::{debug, warn};

/// Client for the CiNii Books OpenSearch and record APIs
///
/// Every call performs exactly one HTTP round trip; the client holds no
/// mutable state and can be cloned freely across tasks.
#[derive(Clone)]
pub struct CiNiiClient {
    client: Client,
    pub(crate) search_endpoint: String,
    pub(crate) retrieve_endpoint: String,
    config: ClientConfig,
}

impl CiNiiClient {
    /// Create a new client with default configuration
    ///
    /// No appid is configured; searches must then carry one in the query.
    ///
    /// # Example
    ///
    /// ```
    /// use cinii_client::CiNiiClient;
    ///
    /// let client = CiNiiClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use cinii_client::{CiNiiClient, ClientConfig};
    ///
    /// let config = ClientConfig::new().with_appid("your_appid_here");
    /// let client = CiNiiClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self::from_parts(client, config)
    }

    /// Create a new client with a custom HTTP client and the given configuration
    ///
    /// The configuration's timeout and user agent are not applied; configure
    /// them on `client` instead.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self::from_parts(client, config)
    }

    fn from_parts(client: Client, config: ClientConfig) -> Self {
        Self {
            client,
            search_endpoint: config.effective_search_endpoint().to_string(),
            retrieve_endpoint: config.effective_retrieve_endpoint().to_string(),
            config,
        }
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one GET request and fail on non-success status
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        debug!(url = %mask_appid(url), "Making CiNii API request");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(CiNiiError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for CiNiiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the value of any `appid` parameter so URLs can be logged
pub(crate) fn mask_appid(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if !parsed.query_pairs().any(|(name, _)| name == APPID_PARAM) {
        return url.to_string();
    }

    let masked: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == APPID_PARAM {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(&masked);
    parsed.into()
}

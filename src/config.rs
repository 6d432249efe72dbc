//! Client configuration
//!
//! [`ClientConfig`] carries the CiNii appid, the two endpoint URLs and the HTTP
//! settings handed to reqwest. The environment is only consulted through
//! [`ClientConfig::from_env`] / [`appid_from_env`], which callers run once at
//! start-up.

use std::env;
use std::time::Duration;

use crate::error::{CiNiiError, Result};

/// Environment variable holding the CiNii appid
pub const APPID_ENV_VAR: &str = "CINII_APPID";

/// CiNii Books OpenSearch endpoint
pub const SEARCH_ENDPOINT: &str = "http://ci.nii.ac.jp/books/opensearch/search";

/// CiNii Books record endpoint; records live at `<endpoint>/<ncid>.rdf`
pub const RETRIEVE_ENDPOINT: &str = "http://ci.nii.ac.jp/ncid";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Read the appid from `CINII_APPID`
///
/// # Errors
///
/// Returns `CiNiiError::MissingAppId` if the variable is unset or empty.
pub fn appid_from_env() -> Result<String> {
    match env::var(APPID_ENV_VAR) {
        Ok(appid) if !appid.trim().is_empty() => Ok(appid.trim().to_string()),
        _ => Err(CiNiiError::MissingAppId {
            var: APPID_ENV_VAR.to_string(),
        }),
    }
}

/// Configuration for [`CiNiiClient`](crate::CiNiiClient)
///
/// # Example
///
/// ```
/// use cinii_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_appid("your_appid_here")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.appid.as_deref(), Some("your_appid_here"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// CiNii appid appended to every request
    pub appid: Option<String>,
    /// Override for the OpenSearch endpoint
    pub search_endpoint: Option<String>,
    /// Override for the record endpoint
    pub retrieve_endpoint: Option<String>,
    /// Request timeout passed to the HTTP client
    pub timeout: Duration,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Configuration with the public endpoints and no appid
    pub fn new() -> Self {
        Self {
            appid: None,
            search_endpoint: None,
            retrieve_endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Configuration whose appid is read from `CINII_APPID`
    ///
    /// # Errors
    ///
    /// Returns `CiNiiError::MissingAppId` if the variable is unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new().with_appid(appid_from_env()?))
    }

    pub fn with_appid<S: Into<String>>(mut self, appid: S) -> Self {
        self.appid = Some(appid.into());
        self
    }

    pub fn with_search_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.search_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_retrieve_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.retrieve_endpoint = Some(endpoint.into());
        self
    }

    /// Point both endpoints at another host, keeping the CiNii paths
    ///
    /// Mostly useful for tests against a mock server.
    ///
    /// ```
    /// use cinii_client::ClientConfig;
    ///
    /// let config = ClientConfig::new().with_base_url("http://127.0.0.1:8080/");
    /// assert_eq!(
    ///     config.effective_search_endpoint(),
    ///     "http://127.0.0.1:8080/books/opensearch/search"
    /// );
    /// assert_eq!(config.effective_retrieve_endpoint(), "http://127.0.0.1:8080/ncid");
    /// ```
    pub fn with_base_url<S: AsRef<str>>(self, base_url: S) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        self.with_search_endpoint(format!("{}/books/opensearch/search", base))
            .with_retrieve_endpoint(format!("{}/ncid", base))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn effective_search_endpoint(&self) -> &str {
        self.search_endpoint.as_deref().unwrap_or(SEARCH_ENDPOINT)
    }

    pub fn effective_retrieve_endpoint(&self) -> &str {
        self.retrieve_endpoint
            .as_deref()
            .unwrap_or(RETRIEVE_ENDPOINT)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("cinii-client/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

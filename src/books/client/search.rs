//! OpenSearch operations

use crate::books::models::SearchResult;
use crate::books::parser::parse_search_result;
use crate::books::query::SearchQuery;
use crate::config::APPID_ENV_VAR;
use crate::error::{CiNiiError, Result};
use tracing::{debug, info, instrument};

use super::CiNiiClient;

impl CiNiiClient {
    /// Search CiNii Books through the OpenSearch endpoint
    ///
    /// If the query carries no `appid`, the client's configured appid is used.
    ///
    /// # Errors
    ///
    /// * `CiNiiError::InvalidQuery` - If the query has no search parameters
    /// * `CiNiiError::MissingAppId` - If neither the query nor the config has an appid
    /// * `CiNiiError::RequestError` / `CiNiiError::ApiError` - If the request fails
    /// * `CiNiiError::XmlError` - If the response is not a valid Atom feed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cinii_client::{CiNiiClient, ClientConfig, SearchQuery};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CiNiiClient::with_config(ClientConfig::from_env()?);
    ///     let result = client.search(&SearchQuery::new().keyword("夏目漱石")).await?;
    ///
    ///     println!("{} hits", result.total_results);
    ///     for entry in &result.entries {
    ///         println!("{}: {}", entry.ncid(), entry.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, query), fields(params = query.params().len()))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        let url = self.search_url(query)?;

        debug!("Making OpenSearch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let result = parse_search_result(&xml_text)?;

        info!(
            total_results = result.total_results,
            returned = result.entries.len(),
            "OpenSearch completed"
        );

        Ok(result)
    }

    /// Build the request URL, filling in the configured appid when needed
    pub(crate) fn search_url(&self, query: &SearchQuery) -> Result<String> {
        query.validate()?;

        let mut query = query.clone();
        if !query.has_appid() {
            let appid = self
                .config()
                .appid
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .ok_or_else(|| CiNiiError::MissingAppId {
                    var: APPID_ENV_VAR.to_string(),
                })?;
            query = query.appid(appid);
        }

        Ok(format!(
            "{}?{}",
            self.search_endpoint,
            query.to_query_string()
        ))
    }
}

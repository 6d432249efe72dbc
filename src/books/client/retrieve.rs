//! Record retrieval (RDF/XML)

use crate::books::models::Record;
use crate::books::parser::parse_record;
use crate::books::query::APPID_PARAM;
use crate::error::{CiNiiError, Result};
use reqwest::Url;
use tracing::{debug, info, instrument};

use super::{CiNiiClient, mask_appid};

const RDF_SUFFIX: &str = ".rdf";

/// Build the canonical RDF request URL for a record
///
/// `id` may be a bare NCID (`BB19132110`), a record URL with or without the
/// `.rdf` suffix, or an entity URI ending in `#entity`. The fragment is
/// dropped, the endpoint is prefixed to bare identifiers and `.rdf` is
/// appended if missing. When `appid` is given it replaces any `appid` already
/// in the URL and always goes last; other query parameters are kept. Query
/// values are written form-encoded.
///
/// Applying the function to its own output yields the same URL.
///
/// # Errors
///
/// Returns `CiNiiError::InvalidIdentifier` if `id` is empty or names no record.
///
/// # Example
///
/// ```
/// use cinii_client::normalize_record_url;
///
/// let url = normalize_record_url("http://ci.nii.ac.jp/ncid", "BB19132110", Some("key"))?;
/// assert_eq!(url, "http://ci.nii.ac.jp/ncid/BB19132110.rdf?appid=key");
///
/// let again = normalize_record_url("http://ci.nii.ac.jp/ncid", &url, Some("key"))?;
/// assert_eq!(again, url);
/// # Ok::<(), cinii_client::CiNiiError>(())
/// ```
pub fn normalize_record_url(endpoint: &str, id: &str, appid: Option<&str>) -> Result<String> {
    let endpoint = endpoint.trim().trim_end_matches('/');
    let invalid = || CiNiiError::InvalidIdentifier { id: id.to_string() };

    let trimmed = id.trim();
    let absolute = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}/{}", endpoint, trimmed.trim_start_matches('/'))
    };
    let mut url = Url::parse(&absolute).map_err(|_| invalid())?;
    url.set_fragment(None);

    let endpoint_path = Url::parse(endpoint)
        .map(|e| e.path().trim_end_matches('/').to_string())
        .unwrap_or_default();
    let path = url.path().trim_end_matches('/').to_string();
    if path.is_empty() || path == endpoint_path {
        return Err(invalid());
    }
    if path.ends_with(RDF_SUFFIX) {
        url.set_path(&path);
    } else {
        url.set_path(&format!("{}{}", path, RDF_SUFFIX));
    }

    if let Some(appid) = appid.map(str::trim).filter(|a| !a.is_empty()) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| *name != APPID_PARAM)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(&kept)
            .append_pair(APPID_PARAM, appid);
    }
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url.into())
}

impl CiNiiClient {
    /// Fetch a record by NCID or URL using the configured appid (if any)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cinii_client::{CiNiiClient, ClientConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CiNiiClient::with_config(ClientConfig::from_env()?);
    ///     let record = client.fetch_record("BB19132110").await?;
    ///
    ///     if let Some(title) = record.title() {
    ///         println!("{} ({})", title.title, title.reading);
    ///     }
    ///     for author in record.authors().unwrap_or_default() {
    ///         println!("  {} [{}]", author.name, author.id);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_record(&self, id: &str) -> Result<Record> {
        let appid = self.config().appid.clone();
        self.fetch_record_with_appid(id, appid.as_deref()).await
    }

    /// Fetch a record by NCID or URL with an explicit appid
    ///
    /// # Errors
    ///
    /// * `CiNiiError::InvalidIdentifier` - If `id` cannot form a record URL
    /// * `CiNiiError::RequestError` / `CiNiiError::ApiError` - If the request fails
    /// * `CiNiiError::XmlError` - If the response is not a valid RDF document
    #[instrument(skip(self, id, appid), fields(id = %mask_appid(id)))]
    pub async fn fetch_record_with_appid(&self, id: &str, appid: Option<&str>) -> Result<Record> {
        let url = normalize_record_url(&self.retrieve_endpoint, id, appid)?;

        debug!("Making record API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let record = parse_record(&xml_text)?;
        let ncid = record.ncid().unwrap_or_default();

        info!(
            descriptions = record.descriptions.len(),
            ncid = %ncid,
            "Record fetch completed"
        );

        Ok(record)
    }
}

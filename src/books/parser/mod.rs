//! CiNii Books XML parser module
//!
//! Decodes the OpenSearch Atom feed and the RDF/XML record document into the
//! public models.
//!
//! # Module Organization
//!
//! - `xml_types` - Internal XML schema deserialization types
//! - `deserializers` - Custom serde deserializers for individual fields
//! - `converters` - Conversion from XML types to public API models
//!
//! Both entry points first check that the document is well-formed and has the
//! expected root element in the expected namespace, so a truncated or foreign
//! payload is reported as [`CiNiiError::XmlError`] rather than decoding into an
//! empty result.

mod converters;
mod deserializers;
mod xml_types;

use quick_xml::de::from_str;
use tracing::{debug, instrument};

use crate::books::models::{Record, SearchResult};
use crate::common::xml_utils::{ATOM_NS, RDF_NS, retain_vocabulary, verify_document};
use crate::error::{CiNiiError, Result};
use xml_types::{ATOM_VOCABULARY, AtomFeedXml, RDF_VOCABULARY, RdfXml};

fn strip_bom(xml: &str) -> &str {
    xml.strip_prefix('\u{feff}').unwrap_or(xml)
}

/// Parse an OpenSearch Atom response
///
/// # Errors
///
/// Returns `CiNiiError::XmlError` if the body is malformed, its root is not an
/// Atom `feed`, or it does not match the expected schema.
///
/// # Example
///
/// ```
/// use cinii_client::books::parse_search_result;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <feed xmlns="http://www.w3.org/2005/Atom"
///       xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
///   <title>CiNii Books OpenSearch - rust</title>
///   <id>http://ci.nii.ac.jp/books/opensearch/search?q=rust</id>
///   <updated>2024-01-01T00:00:00+09:00</updated>
///   <opensearch:totalResults>1</opensearch:totalResults>
///   <opensearch:startIndex>1</opensearch:startIndex>
///   <opensearch:itemsPerPage>20</opensearch:itemsPerPage>
///   <entry>
///     <title>プログラミングRust</title>
///     <id>http://ci.nii.ac.jp/ncid/BB25879389</id>
///   </entry>
/// </feed>"#;
///
/// let result = parse_search_result(xml)?;
/// assert_eq!(result.total_results, 1);
/// assert_eq!(result.entries[0].ncid(), "BB25879389");
/// # Ok::<(), cinii_client::CiNiiError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_search_result(xml: &str) -> Result<SearchResult> {
    let xml = strip_bom(xml);
    verify_document(xml, ATOM_NS, "feed")?;
    let xml = retain_vocabulary(xml, ATOM_VOCABULARY)?;

    let feed: AtomFeedXml = from_str(&xml)
        .map_err(|e| CiNiiError::xml("Failed to deserialize Atom feed", e))?;
    let result = feed.into_search_result();

    debug!(
        entries = result.entries.len(),
        total_results = result.total_results,
        "Parsed Atom feed"
    );
    Ok(result)
}

/// Parse an RDF/XML record document
///
/// # Errors
///
/// Returns `CiNiiError::XmlError` if the body is malformed, its root is not
/// `rdf:RDF`, or it does not match the expected schema.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_record(xml: &str) -> Result<Record> {
    let xml = strip_bom(xml);
    verify_document(xml, RDF_NS, "RDF")?;
    let xml = retain_vocabulary(xml, RDF_VOCABULARY)?;

    let rdf: RdfXml =
        from_str(&xml).map_err(|e| CiNiiError::xml("Failed to deserialize RDF record", e))?;
    let record = rdf.into_record();

    debug!(descriptions = record.descriptions.len(), "Parsed RDF record");
    Ok(record)
}

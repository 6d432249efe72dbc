//! Internal serde types mirroring the CiNii XML payloads
//!
//! `quick_xml::de` matches on local names only. Each payload therefore comes
//! with the expanded names its fields stand for ([`ATOM_VOCABULARY`],
//! [`RDF_VOCABULARY`]); `common::xml_utils::retain_vocabulary` removes
//! same-named elements from other namespaces before decoding. Repeatable
//! elements are collected as `Vec`s and narrowed in the converters.

use serde::Deserialize;

use super::deserializers::deserialize_count;
use crate::common::xml_utils::{ATOM_NS, RDF_NS, Vocabulary};

const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearch/1.1/";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
const PRISM_NS: &str = "http://prismstandard.org/namespaces/basic/2.0/";
const CINII_NS: &str = "http://ci.nii.ac.jp/ns/1.0/";
const FOAF_NS: &str = "http://xmlns.com/foaf/0.1/";
const BIBO_NS: &str = "http://purl.org/ontology/bibo/";
const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

pub(super) const ATOM_VOCABULARY: &Vocabulary = &[
    (ATOM_NS, "title"),
    (ATOM_NS, "link"),
    (ATOM_NS, "id"),
    (ATOM_NS, "updated"),
    (ATOM_NS, "entry"),
    (ATOM_NS, "author"),
    (ATOM_NS, "name"),
    (OPENSEARCH_NS, "totalResults"),
    (OPENSEARCH_NS, "startIndex"),
    (OPENSEARCH_NS, "itemsPerPage"),
    (DC_NS, "publisher"),
    (PRISM_NS, "publicationDate"),
    (DCTERMS_NS, "isPartOf"),
    (DCTERMS_NS, "hasPart"),
    (CINII_NS, "ownerCount"),
];

pub(super) const RDF_VOCABULARY: &Vocabulary = &[
    (RDF_NS, "Description"),
    (RDF_NS, "type"),
    (FOAF_NS, "isPrimaryTopicOf"),
    (DC_NS, "title"),
    (DCTERMS_NS, "alternative"),
    (DC_NS, "creator"),
    (DC_NS, "publisher"),
    (DC_NS, "language"),
    (DC_NS, "date"),
    (FOAF_NS, "topic"),
    (CINII_NS, "ncid"),
    (PRISM_NS, "edition"),
    (DCTERMS_NS, "isPartOf"),
    (DCTERMS_NS, "hasPart"),
    (CINII_NS, "contentOfWorks"),
    (DCTERMS_NS, "medium"),
    (CINII_NS, "ownerCount"),
    (BIBO_NS, "lccn"),
    (RDFS_NS, "seeAlso"),
    (FOAF_NS, "maker"),
    (BIBO_NS, "owner"),
    (FOAF_NS, "Person"),
    (FOAF_NS, "Organization"),
    (FOAF_NS, "name"),
];

// ================================================================================================
// Atom 1.0 + OpenSearch 1.1
// ================================================================================================

#[derive(Debug, Deserialize)]
pub(super) struct AtomFeedXml {
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default)]
    pub link: Vec<AtomLinkXml>,
    #[serde(default)]
    pub id: Vec<String>,
    #[serde(default)]
    pub updated: Vec<String>,
    #[serde(rename = "totalResults", default, deserialize_with = "deserialize_count")]
    pub total_results: u32,
    #[serde(rename = "startIndex", default, deserialize_with = "deserialize_count")]
    pub start_index: u32,
    #[serde(rename = "itemsPerPage", default, deserialize_with = "deserialize_count")]
    pub items_per_page: u32,
    #[serde(rename = "entry", default)]
    pub entries: Vec<AtomEntryXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AtomLinkXml {
    #[serde(rename = "@rel", default)]
    pub rel: Option<String>,
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AtomEntryXml {
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default)]
    pub id: Vec<String>,
    #[serde(rename = "author", default)]
    pub authors: Vec<AtomAuthorXml>,
    #[serde(rename = "publisher", default)]
    pub publishers: Vec<String>,
    #[serde(rename = "publicationDate", default)]
    pub publication_date: Vec<String>,
    #[serde(rename = "isPartOf", default)]
    pub is_part_of: Vec<LinkedTextXml>,
    #[serde(rename = "hasPart", default)]
    pub has_part: Vec<LinkedTextXml>,
    #[serde(rename = "ownerCount", default, deserialize_with = "deserialize_count")]
    pub owner_count: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct AtomAuthorXml {
    #[serde(default)]
    pub name: Option<String>,
}

/// Element whose target is given either as text content or as `rdf:resource`
#[derive(Debug, Deserialize)]
pub(super) struct LinkedTextXml {
    #[serde(rename = "@title", default)]
    pub title: Option<String>,
    #[serde(rename = "@resource", default)]
    pub resource: Option<String>,
    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}

// ================================================================================================
// RDF/XML
// ================================================================================================

#[derive(Debug, Deserialize)]
pub(super) struct RdfXml {
    #[serde(rename = "Description", default)]
    pub descriptions: Vec<DescriptionXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DescriptionXml {
    #[serde(rename = "@about", default)]
    pub about: Option<String>,
    #[serde(rename = "type", default)]
    pub types: Vec<ResourceAttrXml>,
    #[serde(rename = "isPrimaryTopicOf", default)]
    pub is_primary_topic_of: Vec<ResourceAttrXml>,
    #[serde(default)]
    pub title: Vec<TextFieldXml>,
    #[serde(rename = "alternative", default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub creator: Vec<String>,
    #[serde(rename = "publisher", default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(rename = "topic", default)]
    pub topics: Vec<ResourceFieldXml>,
    #[serde(default)]
    pub ncid: Vec<String>,
    #[serde(default)]
    pub edition: Vec<String>,
    #[serde(rename = "isPartOf", default)]
    pub is_part_of: Vec<ResourceFieldXml>,
    #[serde(rename = "hasPart", default)]
    pub has_part: Vec<ResourceFieldXml>,
    #[serde(rename = "contentOfWorks", default)]
    pub content_of_works: Vec<String>,
    #[serde(default)]
    pub medium: Vec<TitleAttrXml>,
    #[serde(rename = "ownerCount", default, deserialize_with = "deserialize_count")]
    pub owner_count: u32,
    #[serde(default)]
    pub lccn: Vec<String>,
    #[serde(rename = "seeAlso", default)]
    pub see_also: Vec<ResourceAttrXml>,
    #[serde(rename = "maker", default)]
    pub makers: Vec<MakerXml>,
    #[serde(rename = "owner", default)]
    pub owners: Vec<OwnerXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResourceAttrXml {
    #[serde(rename = "@resource", default)]
    pub resource: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TitleAttrXml {
    #[serde(rename = "@title", default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResourceFieldXml {
    #[serde(rename = "@resource", default)]
    pub resource: Option<String>,
    #[serde(rename = "@title", default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TextFieldXml {
    #[serde(rename = "@lang", default)]
    pub lang: Option<String>,
    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NameFieldXml {
    #[serde(rename = "@about", default)]
    pub about: Option<String>,
    #[serde(default)]
    pub name: Vec<TextFieldXml>,
    #[serde(rename = "seeAlso", default)]
    pub see_also: Vec<ResourceAttrXml>,
}

/// `foaf:maker` wrapping a `foaf:Person`
#[derive(Debug, Deserialize)]
pub(super) struct MakerXml {
    #[serde(rename = "Person", default)]
    pub person: Option<NameFieldXml>,
}

/// `bibo:owner` wrapping a `foaf:Organization`
#[derive(Debug, Deserialize)]
pub(super) struct OwnerXml {
    #[serde(rename = "Organization", default)]
    pub organization: Option<NameFieldXml>,
}

//! Public data models for CiNii Books responses
//!
//! [`SearchResult`] and [`Entry`] mirror the OpenSearch Atom feed. [`Record`]
//! and [`Description`] mirror the RDF/XML record document, with accessor
//! methods that project the commonly used fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{local_id, strip_isbn_scheme};

// ================================================================================================
// Search (Atom feed)
// ================================================================================================

/// One page of OpenSearch results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Feed title, usually echoing the query
    pub title: String,
    /// URL of this result page (`link rel="self"`)
    pub self_link: Option<String>,
    /// Feed identifier
    pub id: String,
    /// Feed update timestamp as sent by the server
    pub updated: String,
    /// Total number of matching records
    pub total_results: u32,
    /// 1-based index of the first entry on this page
    pub start_index: u32,
    /// Page size
    pub items_per_page: u32,
    /// Entries in feed order
    pub entries: Vec<Entry>,
}

impl SearchResult {
    /// Whether more results exist beyond this page
    pub fn has_more(&self) -> bool {
        let shown = self.start_index.saturating_sub(1) as u64 + self.entries.len() as u64;
        shown < self.total_results as u64
    }
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    /// Record URL, e.g. `http://ci.nii.ac.jp/ncid/BB19132110`
    pub id: String,
    /// Author names in feed order
    pub authors: Vec<String>,
    pub publishers: Vec<String>,
    pub publication_date: Option<String>,
    /// Series or parent works this record belongs to
    pub parents: Vec<EntryParent>,
    /// Identifiers of child works (volumes)
    pub children: Vec<String>,
    /// Number of libraries holding the record
    pub owner_count: u32,
}

impl Entry {
    /// Local NCID derived from the entry id
    pub fn ncid(&self) -> String {
        local_id(&self.id)
    }

    /// First listed publisher
    pub fn publisher(&self) -> Option<&str> {
        self.publishers.first().map(String::as_str)
    }
}

/// Parent-work reference in a search entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryParent {
    pub title: String,
    pub link: String,
}

// ================================================================================================
// Retrieve (RDF/XML)
// ================================================================================================

/// A decoded record document: one or more RDF descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub descriptions: Vec<Description>,
}

/// Facet of the record a [`Description`] carries
///
/// Assigned once when the document is decoded: the first description is the
/// bibliographic block, later ones are classified by which collections they
/// populate (authors take precedence over holdings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptionRole {
    Bibliographic,
    AuthorBlock,
    HoldingBlock,
    /// A later description carrying neither authors nor holdings
    Auxiliary,
}

impl DescriptionRole {
    /// Classify a description by its position and populated collections
    pub fn classify(index: usize, has_authors: bool, has_holdings: bool) -> Self {
        match (index, has_authors, has_holdings) {
            (0, _, _) => DescriptionRole::Bibliographic,
            (_, true, _) => DescriptionRole::AuthorBlock,
            (_, false, true) => DescriptionRole::HoldingBlock,
            _ => DescriptionRole::Auxiliary,
        }
    }
}

/// One `rdf:Description` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub role: DescriptionRole,
    /// `rdf:about`
    pub about: String,
    /// `rdf:type` resource
    pub resource_type: Option<String>,
    /// `foaf:isPrimaryTopicOf` resource
    pub primary_topic_of: Option<String>,
    pub title: TextFields,
    pub alternatives: Vec<String>,
    pub creator: Option<String>,
    pub publishers: Vec<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub topics: Vec<ResourceField>,
    pub ncid: Option<String>,
    pub edition: Option<String>,
    pub is_part_of: Vec<ResourceField>,
    pub has_part: Vec<ResourceField>,
    pub content_of_works: Vec<String>,
    /// `dcterms:medium` title attribute
    pub medium: Option<String>,
    pub owner_count: u32,
    pub lccn: Vec<String>,
    pub see_also: Vec<String>,
    pub authors: Vec<Author>,
    pub holdings: Vec<Holding>,
}

/// Reference to another resource with an optional `dc:title` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceField {
    pub resource: String,
    pub title: String,
}

/// Text with an optional `xml:lang` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    pub lang: Option<String>,
    pub text: String,
}

/// Repeated text element: a canonical form plus an optional reading
///
/// The canonical entry is the one without `xml:lang`; the reading is the
/// lang-tagged one. Element order in the source does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFields(pub Vec<TextField>);

impl TextFields {
    fn canonical_entry(&self) -> Option<&TextField> {
        self.0
            .iter()
            .find(|f| f.lang.is_none())
            .or_else(|| self.0.first())
    }

    /// Canonical text, empty if there are no entries
    pub fn canonical(&self) -> &str {
        self.canonical_entry().map(|f| f.text.as_str()).unwrap_or("")
    }

    /// Reading (transliteration), empty if the source has none
    pub fn reading(&self) -> &str {
        let canonical = self.canonical_entry();
        self.0
            .iter()
            .find(|f| f.lang.is_some() && !canonical.is_some_and(|c| std::ptr::eq(c, *f)))
            .map(|f| f.text.as_str())
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TextFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())?;
        let reading = self.reading();
        if !reading.is_empty() {
            write!(f, " ({})", reading)?;
        }
        Ok(())
    }
}

/// Identifier-bearing name used for people and organizations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameField {
    /// `rdf:about`, e.g. `http://ci.nii.ac.jp/author/DA00001234#entity`
    pub about: String,
    pub name: TextFields,
    /// `rdfs:seeAlso` resource
    pub see_also: Option<String>,
}

impl NameField {
    /// Local identifier (author ID or library ID) with URI prefixes removed
    pub fn local_id(&self) -> String {
        local_id(&self.about)
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        let name = self.name.canonical();
        if !name.is_empty() {
            parts.push(name.to_string());
        }
        let reading = self.name.reading();
        if !reading.is_empty() {
            parts.push(format!("({})", reading));
        }
        let id = self.local_id();
        if !id.is_empty() {
            parts.push(format!("[{}]", id));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// `foaf:maker` / `foaf:Person`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author(pub NameField);

/// `bibo:owner` / `foaf:Organization`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding(pub NameField);

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ------------------------------------------------------------------------------------------------
// Accessor result rows
// ------------------------------------------------------------------------------------------------

/// Title with its reading; `reading` is empty when the source has none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleReading {
    pub title: String,
    pub reading: String,
}

/// Parent work: title and local NCID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLink {
    pub title: String,
    pub ncid: String,
}

/// Child volume: part label and ISBN without the URN scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub label: String,
    pub isbn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRow {
    pub name: String,
    pub reading: String,
    /// Local author ID
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingRow {
    pub name: String,
    /// Local library ID
    pub id: String,
    /// OPAC lookup URL for this record at the library
    pub opac_url: String,
}

impl Record {
    /// The bibliographic (first) description
    pub fn bibliographic(&self) -> Option<&Description> {
        self.descriptions.first()
    }

    /// Descriptions tagged with `role`, in document order
    pub fn descriptions_with_role(
        &self,
        role: DescriptionRole,
    ) -> impl Iterator<Item = &Description> {
        self.descriptions.iter().filter(move |d| d.role == role)
    }

    /// Local NCID of the record
    pub fn ncid(&self) -> Option<String> {
        let bib = self.bibliographic()?;
        match bib.ncid.as_deref() {
            Some(ncid) if !ncid.is_empty() => Some(ncid.to_string()),
            _ if !bib.about.is_empty() => Some(local_id(&bib.about)),
            _ => None,
        }
    }

    /// Title and reading of the record
    pub fn title(&self) -> Option<TitleReading> {
        let bib = self.bibliographic()?;
        if bib.title.is_empty() {
            return None;
        }
        Some(TitleReading {
            title: bib.title.canonical().to_string(),
            reading: bib.title.reading().to_string(),
        })
    }

    /// Parent works (`dcterms:isPartOf`)
    pub fn parents(&self) -> Option<Vec<WorkLink>> {
        let rows: Vec<WorkLink> = self
            .bibliographic()?
            .is_part_of
            .iter()
            .map(|p| WorkLink {
                title: p.title.clone(),
                ncid: local_id(&p.resource),
            })
            .collect();
        non_empty(rows)
    }

    /// Child volumes (`dcterms:hasPart`)
    pub fn volumes(&self) -> Option<Vec<Volume>> {
        let rows: Vec<Volume> = self
            .bibliographic()?
            .has_part
            .iter()
            .map(|p| Volume {
                label: p.title.clone(),
                isbn: strip_isbn_scheme(&p.resource),
            })
            .collect();
        non_empty(rows)
    }

    /// Subject headings (`foaf:topic` titles)
    pub fn topics(&self) -> Option<Vec<String>> {
        let rows: Vec<String> = self
            .bibliographic()?
            .topics
            .iter()
            .map(|t| t.title.clone())
            .collect();
        non_empty(rows)
    }

    /// Authors from the first description (in document order) that lists any
    ///
    /// A record made of a single description has no author block.
    pub fn authors(&self) -> Option<Vec<AuthorRow>> {
        let block = self.first_populated(|d| !d.authors.is_empty())?;
        let rows: Vec<AuthorRow> = block
            .authors
            .iter()
            .map(|Author(name)| AuthorRow {
                name: name.name.canonical().to_string(),
                reading: name.name.reading().to_string(),
                id: name.local_id(),
            })
            .collect();
        non_empty(rows)
    }

    /// Holding libraries from the first description that lists any
    pub fn holdings(&self) -> Option<Vec<HoldingRow>> {
        let block = self.first_populated(|d| !d.holdings.is_empty())?;
        let rows: Vec<HoldingRow> = block
            .holdings
            .iter()
            .map(|Holding(name)| HoldingRow {
                name: name.name.canonical().to_string(),
                id: name.local_id(),
                opac_url: name.see_also.clone().unwrap_or_default(),
            })
            .collect();
        non_empty(rows)
    }

    fn first_populated(&self, populated: impl Fn(&Description) -> bool) -> Option<&Description> {
        if self.descriptions.len() < 2 {
            return None;
        }
        self.descriptions.iter().find(|d| populated(d))
    }
}

fn non_empty<T>(rows: Vec<T>) -> Option<Vec<T>> {
    if rows.is_empty() { None } else { Some(rows) }
}

//! CiNii Books client for searching and retrieving bibliographic records
//!
//! - `client/mod.rs` - Core client struct, constructors and request helper
//! - `client/search` - OpenSearch (Atom) queries
//! - `client/retrieve` - Record retrieval (RDF/XML) and record URL normalization
//! - `parser` - XML decoding for both payloads
//! - `models` - Public data types and record accessors
//! - `query` - OpenSearch parameter builder

pub mod client;
pub mod models;
pub mod parser;
pub mod query;

// Re-export public types
pub use client::{CiNiiClient, normalize_record_url};
pub use models::{
    Author, AuthorRow, Description, DescriptionRole, Entry, EntryParent, Holding, HoldingRow,
    NameField, Record, ResourceField, SearchResult, TextField, TextFields, TitleReading, Volume,
    WorkLink,
};
pub use parser::{parse_record, parse_search_result};
pub use query::SearchQuery;

//! # CiNii Client
//!
//! A Rust client library for the CiNii Books web API. It searches the
//! OpenSearch endpoint and retrieves RDF records, decoding both into typed
//! structures with accessors for the commonly used fields.
//!
//! ## Features
//!
//! - **OpenSearch**: Query CiNii Books and read one page of Atom results
//! - **Record retrieval**: Fetch a record's RDF/XML by NCID or URL
//! - **Accessors**: Title and reading, parent works, volumes, subjects, authors, holding libraries
//! - **Error Handling**: Configuration, network and parse failures as distinct error variants
//!
//! ## Quick Start
//!
//! ### Searching
//!
//! ```no_run
//! use cinii_client::{CiNiiClient, ClientConfig, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads CINII_APPID once
//!     let client = CiNiiClient::with_config(ClientConfig::from_env()?);
//!
//!     let result = client
//!         .search(&SearchQuery::new().keyword("吾輩は猫である").count(10))
//!         .await?;
//!
//!     for entry in result.entries {
//!         println!("{} - {}", entry.title, entry.authors.join(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Retrieving a record
//!
//! ```no_run
//! use cinii_client::{CiNiiClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CiNiiClient::with_config(ClientConfig::from_env()?);
//!     let record = client.fetch_record("BB19132110").await?;
//!
//!     if let Some(holdings) = record.holdings() {
//!         for library in holdings {
//!             println!("{} [{}] {}", library.name, library.id, library.opac_url);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod books;
pub mod common;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use books::{
    CiNiiClient, Record, SearchQuery, SearchResult, normalize_record_url, parse_record,
    parse_search_result,
};
pub use config::{APPID_ENV_VAR, ClientConfig, appid_from_env};
pub use error::{CiNiiError, ErrorKind, Result};

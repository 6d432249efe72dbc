//! Utilities shared by the search and retrieve pipelines

pub mod ids;
pub(crate) mod xml_utils;

pub use ids::{
    ENTITY_MARKER, ENTITY_PREFIXES, EntityKind, ISBN_SCHEME, entity_kind, local_id,
    strip_isbn_scheme,
};

//! Atom feed parsing tests against a canned OpenSearch response

mod common;

use cinii_client::books::EntryParent;
use cinii_client::{CiNiiError, ErrorKind, parse_search_result};

use common::load_fixture;

#[test]
fn test_feed_metadata() {
    let result = parse_search_result(&load_fixture("search_feed.xml")).unwrap();

    assert_eq!(result.title, "CiNii Books OpenSearch - 日本の歴史");
    assert_eq!(
        result.self_link.as_deref(),
        Some(
            "http://ci.nii.ac.jp/books/opensearch/search?q=%E6%97%A5%E6%9C%AC%E3%81%AE%E6%AD%B4%E5%8F%B2&count=3"
        )
    );
    assert_eq!(
        result.id,
        "http://ci.nii.ac.jp/books/opensearch/search?q=%E6%97%A5%E6%9C%AC%E3%81%AE%E6%AD%B4%E5%8F%B2&count=3"
    );
    assert_eq!(result.updated, "2024-05-01T10:00:00+09:00");
    assert_eq!(result.total_results, 1523);
    assert_eq!(result.start_index, 1);
    assert_eq!(result.items_per_page, 3);
    assert!(result.has_more());
}

#[test]
fn test_entries_in_source_order() {
    let result = parse_search_result(&load_fixture("search_feed.xml")).unwrap();

    assert_eq!(result.entries.len(), 3);
    let ncids: Vec<String> = result.entries.iter().map(|e| e.ncid()).collect();
    assert_eq!(ncids, vec!["BB19132110", "BN10117045", "BA01234567"]);
}

#[test]
fn test_entry_fields() {
    let result = parse_search_result(&load_fixture("search_feed.xml")).unwrap();
    let entry = &result.entries[0];

    assert_eq!(entry.title, "日本の歴史");
    assert_eq!(entry.id, "http://ci.nii.ac.jp/ncid/BB19132110");
    assert_eq!(entry.authors, vec!["網野, 善彦", "大津, 透"]);
    assert_eq!(entry.publisher(), Some("講談社"));
    assert_eq!(entry.publication_date.as_deref(), Some("2008"));
    assert_eq!(
        entry.parents,
        vec![EntryParent {
            title: "講談社学術文庫".to_string(),
            link: "http://ci.nii.ac.jp/ncid/BN00136540".to_string(),
        }]
    );
    assert_eq!(
        entry.children,
        vec!["urn:isbn:9784062919005", "urn:isbn:9784062919012"]
    );
    assert_eq!(entry.owner_count, 312);
}

#[test]
fn test_entry_optional_fields() {
    let result = parse_search_result(&load_fixture("search_feed.xml")).unwrap();

    let second = &result.entries[1];
    assert!(second.parents.is_empty());
    assert!(second.children.is_empty());
    assert_eq!(second.owner_count, 845);

    let third = &result.entries[2];
    assert_eq!(
        third.publishers,
        vec!["Stanford University Press", "Cresset Press"]
    );
    assert_eq!(third.owner_count, 0);
    // Parent given as rdf:resource instead of text content
    assert_eq!(third.parents.len(), 1);
    assert_eq!(third.parents[0].link, "http://ci.nii.ac.jp/ncid/BA00012345");
    assert_eq!(
        third.parents[0].title,
        "Stanford studies in the civilizations of eastern Asia"
    );
}

#[test]
fn test_empty_feed() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title>CiNii Books OpenSearch - zzzz</title>
  <id>http://ci.nii.ac.jp/books/opensearch/search?q=zzzz</id>
  <updated>2024-05-01T10:00:00+09:00</updated>
  <opensearch:totalResults>0</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>0</opensearch:itemsPerPage>
</feed>"#;

    let result = parse_search_result(xml).unwrap();
    assert!(result.entries.is_empty());
    assert_eq!(result.total_results, 0);
    assert!(result.self_link.is_none());
    assert!(!result.has_more());
}

#[test]
fn test_truncated_feed_is_parse_error() {
    let xml = load_fixture("search_feed.xml");
    let truncated = &xml[..xml.rfind("</entry>").unwrap()];

    let err = parse_search_result(truncated).unwrap_err();
    assert!(matches!(err, CiNiiError::XmlError(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_non_xml_body_is_parse_error() {
    let err = parse_search_result("<html><body>Service Unavailable").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    let err = parse_search_result("{\"error\": \"not xml\"}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_entries_serialize_to_json() {
    let result = parse_search_result(&load_fixture("search_feed.xml")).unwrap();
    let json = serde_json::to_value(&result.entries[0]).unwrap();

    assert_eq!(json["title"], "日本の歴史");
    assert_eq!(json["owner_count"], 312);
    assert_eq!(json["authors"][1], "大津, 透");
}

//! OpenSearch client tests against a mock server

mod common;

use cinii_client::{CiNiiClient, CiNiiError, ClientConfig, ErrorKind, SearchQuery};
use tracing_test::traced_test;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TEST_APPID, create_test_client, load_fixture};

const SEARCH_PATH: &str = "/books/opensearch/search";

#[tokio::test]
#[traced_test]
async fn test_search_returns_parsed_feed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "日本の歴史"))
        .and(query_param("count", "3"))
        .and(query_param("appid", TEST_APPID))
        .and(header("user-agent", "cinii-client-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search_feed.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .search(&SearchQuery::new().keyword("日本の歴史").count(3))
        .await
        .unwrap();

    assert_eq!(result.total_results, 1523);
    assert_eq!(result.entries.len(), 3);
    assert_eq!(result.entries[0].ncid(), "BB19132110");
}

#[tokio::test]
#[traced_test]
async fn test_query_appid_overrides_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("appid", "per-query"))
        .and(query_param("title", "歴史"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search_feed.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .search(&SearchQuery::new().title("歴史").appid("per-query"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
#[traced_test]
async fn test_server_error_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client
        .search(&SearchQuery::new().keyword("rust"))
        .await
        .unwrap_err();

    assert!(matches!(err, CiNiiError::ApiError { status: 500, .. }));
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
#[traced_test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<feed xmlns=\"http://www.w3.org/2005/Atom\"><title>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client
        .search(&SearchQuery::new().keyword("rust"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
#[traced_test]
async fn test_missing_appid_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = CiNiiClient::with_config(ClientConfig::new().with_base_url(mock_server.uri()));
    let err = client
        .search(&SearchQuery::new().keyword("rust"))
        .await
        .unwrap_err();

    assert!(matches!(err, CiNiiError::MissingAppId { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
#[traced_test]
async fn test_empty_query_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client.search(&SearchQuery::new()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
#[traced_test]
async fn test_unreachable_server_is_request_error() {
    // Nothing listens on port 1
    let client = create_test_client("http://127.0.0.1:1");
    let err = client
        .search(&SearchQuery::new().keyword("rust"))
        .await
        .unwrap_err();

    assert!(matches!(err, CiNiiError::RequestError(_)));
    assert_eq!(err.kind(), ErrorKind::Network);
}

//! Record retrieval tests against a mock server

mod common;

use cinii_client::{CiNiiClient, CiNiiError, ClientConfig, ErrorKind};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TEST_APPID, create_test_client, load_fixture};

const RECORD_PATH: &str = "/ncid/BB19132110.rdf";

async fn mount_record(mock_server: &MockServer, appid: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(RECORD_PATH))
        .and(query_param("appid", appid))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("record_full.rdf")))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_fetch_record_by_ncid() {
    let mock_server = MockServer::start().await;
    mount_record(&mock_server, TEST_APPID, 1).await;

    let client = create_test_client(&mock_server.uri());
    let record = client.fetch_record("BB19132110").await.unwrap();

    assert_eq!(record.descriptions.len(), 3);
    assert_eq!(record.ncid().as_deref(), Some("BB19132110"));
    assert_eq!(record.authors().map(|a| a.len()), Some(2));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_record_by_url_forms() {
    let mock_server = MockServer::start().await;
    mount_record(&mock_server, TEST_APPID, 3).await;

    let client = create_test_client(&mock_server.uri());
    let record_url = format!("{}/ncid/BB19132110", mock_server.uri());

    for id in [
        record_url.clone(),
        format!("{}.rdf", record_url),
        format!("{}#entity", record_url),
    ] {
        let record = client.fetch_record(&id).await.unwrap();
        assert_eq!(record.ncid().as_deref(), Some("BB19132110"));
    }
}

#[tokio::test]
#[traced_test]
async fn test_fetch_record_with_explicit_appid() {
    let mock_server = MockServer::start().await;
    mount_record(&mock_server, "explicit", 1).await;

    let client = create_test_client(&mock_server.uri());
    let record = client
        .fetch_record_with_appid("BB19132110", Some("explicit"))
        .await
        .unwrap();

    assert_eq!(
        record.holdings().map(|h| h[0].id.clone()).as_deref(),
        Some("FA005358")
    );
}

#[tokio::test]
#[traced_test]
async fn test_fetch_record_without_appid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ncid/BA87654321.rdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("record_bibliographic_only.rdf")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CiNiiClient::with_config(ClientConfig::new().with_base_url(mock_server.uri()));
    let record = client.fetch_record("BA87654321").await.unwrap();

    assert!(record.authors().is_none());
    assert!(record.holdings().is_none());
}

#[tokio::test]
#[traced_test]
async fn test_missing_record_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ncid/XX00000000.rdf"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client.fetch_record("XX00000000").await.unwrap_err();

    match &err {
        CiNiiError::ApiError { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
#[traced_test]
async fn test_non_rdf_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RECORD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("search_feed.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client.fetch_record("BB19132110").await.unwrap_err();

    assert!(matches!(err, CiNiiError::XmlError(_)));
}

#[tokio::test]
#[traced_test]
async fn test_invalid_identifier_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    for id in ["", "   ", "#entity"] {
        let err = client.fetch_record(id).await.unwrap_err();
        assert!(matches!(err, CiNiiError::InvalidIdentifier { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

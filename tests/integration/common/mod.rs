//! Shared helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use cinii_client::{CiNiiClient, ClientConfig};

pub const TEST_APPID: &str = "test-appid";

/// Absolute path of a file under `tests/integration/test_data`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/integration/test_data")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Should read fixture {:?}: {}", path, e))
}

/// Client pointing at a mock server, with a test appid configured
pub fn create_test_client(base_url: &str) -> CiNiiClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_appid(TEST_APPID)
        .with_user_agent("cinii-client-tests");
    CiNiiClient::with_config(config)
}

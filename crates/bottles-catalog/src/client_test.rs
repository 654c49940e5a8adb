use super::*;

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, "production", "2024-01-01", None, 30, "bottles-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn build_query_url_constructs_versioned_path() {
    let client = test_client("https://abc123.api.sanity.io");
    let url = client.build_query_url("*[0]", "roll-on-9ml").unwrap();
    assert_eq!(url.path(), "/v2024-01-01/data/query/production");
}

#[test]
fn build_query_url_strips_trailing_slash() {
    let client = test_client("https://abc123.api.sanity.io/");
    let url = client.build_query_url("*[0]", "x").unwrap();
    assert!(
        url.as_str()
            .starts_with("https://abc123.api.sanity.io/v2024-01-01/data/query/production?"),
        "{url}"
    );
}

#[test]
fn build_query_url_accepts_prefixed_api_version() {
    let client = CatalogClient::new(
        "https://abc123.api.sanity.io",
        "staging",
        "v2021-10-21",
        None,
        30,
        "bottles-test/0.1",
    )
    .unwrap();
    let url = client.build_query_url("*[0]", "x").unwrap();
    assert_eq!(url.path(), "/v2021-10-21/data/query/staging");
}

#[test]
fn build_query_url_json_encodes_id_param() {
    let client = test_client("https://abc123.api.sanity.io");
    let url = client.build_query_url("*[0]", "roll-on-9ml").unwrap();
    let id = url
        .query_pairs()
        .find(|(k, _)| k == "$id")
        .map(|(_, v)| v.into_owned());
    assert_eq!(id.as_deref(), Some("\"roll-on-9ml\""));
}

#[test]
fn build_query_url_keeps_base_path_prefix() {
    let client = test_client("https://cms.example.com/api");
    let url = client.build_query_url("*[0]", "x").unwrap();
    assert_eq!(url.path(), "/api/v2024-01-01/data/query/production");
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = CatalogClient::new("not a url", "production", "1", None, 30, "ua");
    assert!(matches!(result, Err(CatalogError::InvalidBaseUrl { .. })));
}

#[test]
fn redact_query_drops_query_string() {
    let url = Url::parse("https://abc123.api.sanity.io/v1/data/query/production?query=x").unwrap();
    assert_eq!(
        redact_query(&url),
        "https://abc123.api.sanity.io/v1/data/query/production"
    );
}

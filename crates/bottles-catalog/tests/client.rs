//! Integration tests for `CatalogClient` and the configuration loader using
//! wiremock HTTP mocks. No real network traffic is made.

use bottles_catalog::{load_product_config, CatalogClient, CatalogError, CatalogSource, LoadError};
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

fn test_client(base_url: &str, token: Option<&str>) -> CatalogClient {
    CatalogClient::new(base_url, "production", "2024-01-01", token, 5, "bottles-test/0.1")
        .expect("client construction should not fail")
}

fn component(id: &str, name: &str, sku_part: &str, price: f64) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "skuPart": sku_part,
        "priceModifier": price,
        "layerImage": format!("https://cdn.example.com/images/{id}.png"),
        "previewSwatchImage": null,
        "overcapImage": null,
        "assemblyOffset": null,
        "finish": null,
        "color": null,
        "style": null,
        "material": null
    })
}

fn roll_on_body() -> serde_json::Value {
    json!({
        "ms": 7,
        "query": "*[...]",
        "result": {
            "_id": "roll-on-9ml",
            "title": "9ml Roll-On",
            "basePrice": 1.5,
            "sku": "RO9",
            "defaultGlass": component("glass-clear", "Clear", "GBCyl", 0.0),
            "glassOptions": [
                component("glass-clear", "Clear", "GBCyl", 0.0),
                component("glass-amber", "Amber", "GBAmb", 0.25)
            ],
            "fitmentOptions": [
                component("fitment-roller-plastic", "Plastic Roller", "Roll", 0.0)
            ],
            "capOptions": [
                component("cap-gold-shiny", "Shiny Gold", "GlSh", 0.5),
                null
            ],
            "capSwatches": null
        }
    })
}

#[tokio::test]
async fn load_product_config_resolves_product_in_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("$id", "\"roll-on-9ml\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(roll_on_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let config = load_product_config(&client, "roll-on-9ml")
        .await
        .expect("should load configuration");

    assert_eq!(config.id, "roll-on-9ml");
    assert_eq!(config.title, "9ml Roll-On");
    assert_eq!(config.base_price, Decimal::new(15, 1));
    assert_eq!(config.default_glass().id, "glass-clear");
    assert_eq!(config.glass_options().len(), 2);
    assert_eq!(config.glass_options()[1].price_modifier, Decimal::new(25, 2));
    assert_eq!(config.fitment_options().len(), 1);
    assert_eq!(config.cap_options().len(), 1, "null cap reference is skipped");
    assert!(!config.is_fused());
    assert_eq!(
        config.cap_options()[0].layer_image,
        "https://cdn.example.com/images/cap-gold-shiny.png"
    );
}

#[tokio::test]
async fn load_product_config_null_result_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ms": 1, "result": null})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = load_product_config(&client, "ghost").await.unwrap_err();
    assert!(
        matches!(err, LoadError::NotFound { ref product_id } if product_id == "ghost"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn load_product_config_server_error_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = load_product_config(&client, "roll-on-9ml")
        .await
        .unwrap_err();
    assert!(
        matches!(err, LoadError::Unavailable { ref reason, .. } if reason.contains("500")),
        "got: {err:?}"
    );
    assert_eq!(err.user_message(), "unable to load configuration");
}

#[tokio::test]
async fn load_product_config_missing_dataset_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = load_product_config(&client, "roll-on-9ml")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Unavailable { .. }), "got: {err:?}");
}

#[tokio::test]
async fn load_product_config_unreachable_catalog_is_unavailable() {
    // Port 1 on localhost refuses connections.
    let client = test_client("http://127.0.0.1:1", None);
    let err = load_product_config(&client, "roll-on-9ml")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Unavailable { .. }), "got: {err:?}");
}

#[tokio::test]
async fn load_product_config_product_without_glass_is_unavailable() {
    let server = MockServer::start().await;

    let mut body = roll_on_body();
    body["result"]["glassOptions"] = json!(null);

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = load_product_config(&client, "roll-on-9ml")
        .await
        .unwrap_err();
    assert!(
        matches!(err, LoadError::Unavailable { ref reason, .. } if reason.contains("glass")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_product_document_reports_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let err = client
        .fetch_product_document("roll-on-9ml")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn fetch_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(header("authorization", "Bearer sk-test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roll_on_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("sk-test-token"));
    let config = client
        .fetch_product_config("roll-on-9ml")
        .await
        .expect("authorized request should succeed");
    assert_eq!(config.sku, "RO9");
}

#[tokio::test]
async fn fused_product_loads_with_authored_swatches() {
    let server = MockServer::start().await;

    let mut sprayer = component("fitment-sprayer-gold-shiny", "Shiny Gold Sprayer", "SpGl", 0.0);
    sprayer["overcapImage"] = json!("https://cdn.example.com/images/overcap-gold.png");
    sprayer["assemblyOffset"] = json!({ "x": 0, "y": -14.4 });

    let body = json!({
        "result": {
            "_id": "spray-10ml",
            "title": "10ml Sprayer",
            "basePrice": 2.25,
            "sku": "SP10",
            "defaultGlass": null,
            "glassOptions": [component("glass-clear", "Clear", "GBCyl", 0.0)],
            "fitmentOptions": [sprayer],
            "capOptions": null,
            "capSwatches": [
                { "label": "Shiny Gold", "color": "gold", "finish": "shiny" }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let config = load_product_config(&client, "spray-10ml").await.unwrap();
    assert!(config.is_fused());
    assert_eq!(config.cap_swatches().len(), 1);
    assert_eq!(config.cap_swatches()[0].id, "shiny-gold");
    let fitment = &config.fitment_options()[0];
    assert_eq!(
        fitment.overcap_image.as_deref(),
        Some("https://cdn.example.com/images/overcap-gold.png")
    );
    assert_eq!(fitment.assembly_offset.map(|o| o.y), Some(-14));
}

mod common;

use axum::http::StatusCode;
use paintpro_backend::{config::Settings, domain::pricing::PricingOverrides};
use serde_json::json;

use common::{money, send, test_app};

const ACCOUNT: &str = "0b7e4a3c-5d21-4f6e-8c90-a1b2c3d4e5f6";

#[tokio::test]
async fn test_defaults_include_deployment_baseline() {
    let baseline: PricingOverrides =
        serde_json::from_value(json!({ "laborRate": 58, "materialRates": { "trims": 0.9 } }))
            .unwrap();
    let app = test_app(Settings {
        default_pricing: baseline,
        ..Settings::default()
    });

    let (status, body) = send(&app, "GET", "/pricing/defaults", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(money(&body["data"]["laborRate"]), 58.0);
    assert_eq!(money(&body["data"]["materialRates"]["trims"]), 0.9);
    assert_eq!(money(&body["data"]["overheadRate"]), 0.15);
}

#[tokio::test]
async fn test_account_pricing_round_trip() {
    let app = test_app(Settings::default());
    let uri = format!("/accounts/{}/pricing", ACCOUNT);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["accountId"], json!(ACCOUNT));
    assert_eq!(body["data"]["overrides"], json!({}));
    assert_eq!(money(&body["data"]["effective"]["laborRate"]), 45.0);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({
            "laborRate": "62.5",
            "productionRates": { "wallPainting": 0, "trims": 75 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let effective = &body["data"]["effective"];
    assert_eq!(money(&effective["laborRate"]), 62.5);
    // zero production rate falls back to the default
    assert_eq!(money(&effective["productionRates"]["wallPainting"]), 150.0);
    assert_eq!(money(&effective["productionRates"]["trims"]), 75.0);
    assert_eq!(money(&body["data"]["overrides"]["laborRate"]), 62.5);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(money(&body["data"]["effective"]["laborRate"]), 62.5);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(money(&body["data"]["effective"]["laborRate"]), 45.0);
}

#[tokio::test]
async fn test_invalid_account_id_is_rejected() {
    let app = test_app(Settings::default());

    let (status, body) = send(&app, "GET", "/accounts/not-a-uuid/pricing", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("BAD_REQUEST"));
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn test_malformed_pricing_body_is_rejected() {
    let app = test_app(Settings::default());
    let uri = format!("/accounts/{}/pricing", ACCOUNT);

    let (status, body) = send(&app, "PUT", &uri, Some(json!(["laborRate", 50]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn test_invalid_account_rate_falls_back_to_deployment_baseline() {
    let baseline: PricingOverrides =
        serde_json::from_value(json!({ "laborRate": 58 })).unwrap();
    let app = test_app(Settings {
        default_pricing: baseline,
        ..Settings::default()
    });
    let uri = format!("/accounts/{}/pricing", ACCOUNT);

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "laborRate": 0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(money(&body["data"]["effective"]["laborRate"]), 58.0);

    let (_, body) = send(&app, "GET", "/pricing/defaults", None).await;
    assert_eq!(money(&body["data"]["laborRate"]), 58.0);

    let (status, body) = send(
        &app,
        "POST",
        "/estimates/calculate",
        Some(json!({
            "accountId": ACCOUNT,
            "pricing": { "overheadRate": 0, "profitMarginRate": 0 },
            "rooms": [{ "id": 1, "name": "Hall", "prepHours": 1, "services": [] }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(money(&body["data"]["laborCost"]), 58.0);
}

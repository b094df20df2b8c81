mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};

async fn add_investment(
    app: &axum::Router,
    token: &str,
    kind: &str,
    initial: f64,
    current: f64,
) -> Result<()> {
    let (status, _) = common::post(
        app,
        "/api/investments/add",
        Some(token),
        json!({ "type": kind, "initialAmount": initial, "currentValue": current }),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn returns_compute_roi_per_investment() -> Result<()> {
    let app = common::test_app();
    let token = common::register_and_login(&app, "Ada", "ada@example.com").await?;

    add_investment(&app, &token, "stocks", 100.0, 150.0).await?;
    add_investment(&app, &token, "bonds", 200.0, 190.0).await?;

    let (status, body) = common::get(&app, "/api/investments/returns", Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "type": "stocks", "roi": 50.0 },
            { "type": "bonds", "roi": -5.0 },
        ])
    );
    Ok(())
}

#[tokio::test]
async fn zero_initial_amount_serializes_roi_as_null() -> Result<()> {
    let app = common::test_app();
    let token = common::register_and_login(&app, "Ada", "ada@example.com").await?;

    // Division by zero yields a non-finite f64; on the wire that is null.
    add_investment(&app, &token, "airdrop", 0.0, 10.0).await?;

    let (status, body) = common::get(&app, "/api/investments/returns", Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["type"], "airdrop");
    assert_eq!(body[0]["roi"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn created_investment_echoes_its_fields() -> Result<()> {
    let app = common::test_app();
    let token = common::register_and_login(&app, "Ada", "ada@example.com").await?;

    let (status, body) = common::post(
        &app,
        "/api/investments/add",
        Some(&token),
        json!({ "type": "index fund", "initialAmount": 1000.0, "currentValue": 1100.0 }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Investment added successfully");
    assert_eq!(body["investment"]["type"], "index fund");
    assert_eq!(body["investment"]["initialAmount"], 1000.0);
    assert_eq!(body["investment"]["currentValue"], 1100.0);
    assert!(body["investment"]["id"].is_string());
    Ok(())
}

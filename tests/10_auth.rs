mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_requires_all_fields() -> Result<()> {
    let app = common::test_app();

    let cases = [
        (json!({ "email": "a@b.com", "password": "pw" }), "name"),
        (json!({ "name": "Ada", "password": "pw" }), "email"),
        (json!({ "name": "Ada", "email": "a@b.com" }), "password"),
    ];
    for (body, field) in cases {
        let (status, body) = common::post(&app, "/api/register", None, body).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], format!("{field} is required"));
    }
    Ok(())
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() -> Result<()> {
    let app = common::test_app();
    let body = json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" });

    let (status, reply) = common::post(&app, "/api/register", None, body.clone()).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reply["message"], "User registered successfully");

    // Same email again, even under a different name
    let again = json!({ "name": "Other", "email": "ada@example.com", "password": "pw2" });
    let (status, reply) = common::post(&app, "/api/register", None, again).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["message"], "User already exists");
    Ok(())
}

#[tokio::test]
async fn login_returns_a_token() -> Result<()> {
    let app = common::test_app();
    let token = common::register_and_login(&app, "Ada", "ada@example.com").await?;
    assert!(!token.is_empty());
    Ok(())
}

#[tokio::test]
async fn bad_logins_share_one_generic_rejection() -> Result<()> {
    let app = common::test_app();
    common::register_and_login(&app, "Ada", "ada@example.com").await?;

    // Wrong password for a real account vs. an account that does not exist:
    // identical status and message, so the reply reveals neither.
    let wrong_password = json!({ "email": "ada@example.com", "password": "nope" });
    let unknown_email = json!({ "email": "ghost@example.com", "password": "nope" });

    let (status_a, body_a) = common::post(&app, "/api/login", None, wrong_password).await?;
    let (status_b, body_b) = common::post(&app, "/api/login", None, unknown_email).await?;

    assert_eq!(status_a, StatusCode::BAD_REQUEST);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a["message"], "Invalid email or password");
    assert_eq!(body_a, body_b);
    Ok(())
}

#[tokio::test]
async fn login_requires_both_fields() -> Result<()> {
    let app = common::test_app();

    let (status, body) =
        common::post(&app, "/api/login", None, json!({ "password": "pw" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "email is required");

    let (status, body) =
        common::post(&app, "/api/login", None, json!({ "email": "a@b.com" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password is required");
    Ok(())
}

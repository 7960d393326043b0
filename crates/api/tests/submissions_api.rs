//! Public form submissions: contact, newsletter and job applications.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, get_auth, post_json, post_json_auth, put_json_auth};
use heptapus_api::captcha::CaptchaConfig;
use heptapus_db::repositories::SubscriberRepo;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn contact_form() -> serde_json::Value {
    json!({
        "name": "Ayşe Yılmaz",
        "email": "Ayse@Example.com",
        "subject": "Teklif",
        "message": "Projeniz hakkında bilgi almak istiyoruz."
    })
}

async fn create_job(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/jobs",
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_submission_lands_in_inbox(pool: PgPool) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/contact")
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
        .body(Body::from(contact_form().to_string()))
        .unwrap();
    let response = common::build_test_app(pool.clone())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt = body_json(response).await;
    assert_eq!(receipt["status"], "received");
    let id = receipt["id"].as_i64().unwrap();

    let token = common::token_for(&pool, "editor", "editor").await;
    let inbox = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/contact?unread=true",
        &token,
    )
    .await;
    let inbox = body_json(inbox).await;
    assert_eq!(inbox["data"][0]["email"], "ayse@example.com");
    assert_eq!(inbox["data"][0]["ip_address"], "203.0.113.9");

    let read = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/contact/{id}/read"),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(read.status(), StatusCode::OK);

    let unread = get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/contact?unread=true",
        &token,
    )
    .await;
    assert!(body_json(unread).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_validation_errors(pool: PgPool) {
    let mut form = contact_form();
    form["email"] = json!("not-an-email");
    let response = post_json(common::build_test_app(pool), "/api/v1/contact", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid value for: email");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_captcha_token_is_rejected_when_enabled(pool: PgPool) {
    let mut config = common::test_config();
    config.captcha = CaptchaConfig {
        secret: Some("s3cret".into()),
        verify_url: "http://127.0.0.1:9/siteverify".into(),
    };

    let response = post_json(
        common::build_test_app_with(pool, config),
        "/api/v1/contact",
        contact_form(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CAPTCHA_FAILED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_newsletter_subscribe_and_unsubscribe(pool: PgPool) {
    let signup = json!({ "email": "Reader@Example.com" });

    let first = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/newsletter/subscribe?locale=en",
        signup.clone(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = body_json(first).await;
    assert_eq!(first["status"], "subscribed");
    assert_eq!(first["locale"], "en");
    assert_eq!(first["email"], "reader@example.com");

    let again = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/newsletter/subscribe",
        signup.clone(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::OK);
    assert_eq!(body_json(again).await["status"], "already_subscribed");

    let subscriber = SubscriberRepo::find_by_email(&pool, "reader@example.com")
        .await
        .unwrap()
        .unwrap();
    let unsubscribe = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/newsletter/unsubscribe",
        json!({ "token": subscriber.unsubscribe_token }),
    )
    .await;
    assert_eq!(unsubscribe.status(), StatusCode::NO_CONTENT);

    // The token only works once.
    let repeat = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/newsletter/unsubscribe",
        json!({ "token": subscriber.unsubscribe_token }),
    )
    .await;
    assert_eq!(repeat.status(), StatusCode::NOT_FOUND);

    let back = post_json(
        common::build_test_app(pool),
        "/api/v1/newsletter/subscribe",
        signup,
    )
    .await;
    assert_eq!(back.status(), StatusCode::OK);
    assert_eq!(body_json(back).await["status"], "resubscribed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_application_flow(pool: PgPool) {
    let token = common::token_for(&pool, "hr", "editor").await;
    let job = create_job(
        &pool,
        &token,
        json!({
            "title": "Yazılım Mühendisi",
            "description": "Rust ile backend geliştirme.",
            "description_en": "Backend development in Rust.",
            "employment_type": "full-time"
        }),
    )
    .await;
    assert_eq!(job["slug"], "yazilim-muhendisi");
    let job_id = job["id"].as_i64().unwrap();

    let public = get(
        common::build_test_app(pool.clone()),
        "/api/v1/careers/yazilim-muhendisi?locale=en",
    )
    .await;
    assert_eq!(body_json(public).await["description"], "Backend development in Rust.");

    let apply = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/careers/yazilim-muhendisi/apply",
        json!({
            "full_name": "Mehmet Demir",
            "email": "mehmet@example.com",
            "resume_url": "https://example.com/cv.pdf"
        }),
    )
    .await;
    assert_eq!(apply.status(), StatusCode::CREATED);
    let application_id = body_json(apply).await["id"].as_i64().unwrap();

    let applications = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/jobs/{job_id}/applications"),
        &token,
    )
    .await;
    let applications = body_json(applications).await;
    assert_eq!(applications["data"][0]["status"], "new");

    let bad_status = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/applications/{application_id}/status"),
        json!({ "status": "ghosted" }),
        &token,
    )
    .await;
    assert_eq!(bad_status.status(), StatusCode::BAD_REQUEST);

    let reviewing = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/admin/applications/{application_id}/status"),
        json!({ "status": "reviewing" }),
        &token,
    )
    .await;
    assert_eq!(reviewing.status(), StatusCode::OK);
    assert_eq!(body_json(reviewing).await["status"], "reviewing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cannot_apply_to_closed_posting(pool: PgPool) {
    let token = common::token_for(&pool, "hr", "editor").await;
    create_job(
        &pool,
        &token,
        json!({
            "title": "Stajyer",
            "description": "Yaz stajı.",
            "employment_type": "internship",
            "closes_at": (chrono::Utc::now() - chrono::Duration::days(1)).to_rfc3339()
        }),
    )
    .await;

    let listing = get(common::build_test_app(pool.clone()), "/api/v1/careers").await;
    assert!(body_json(listing).await["data"].as_array().unwrap().is_empty());

    let apply = post_json(
        common::build_test_app(pool),
        "/api/v1/careers/stajyer/apply",
        json!({ "full_name": "Zeynep Kaya", "email": "zeynep@example.com" }),
    )
    .await;
    assert_eq!(apply.status(), StatusCode::NOT_FOUND);
}

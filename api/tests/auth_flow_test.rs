//! Registration, login and token-gated access through the HTTP surface

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use ck_api::middleware::TOKEN_HEADER;
use ck_core::domain::value_objects::Identity;
use common::{register_and_login, send, TestContext};

#[actix_web::test]
async fn test_register_returns_account_without_hash() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "name": "Ana", "email": "ana@example.com", "password": "s3cret!" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_register_duplicate_email_conflicts() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    register_and_login(&app, "Ana", "ana@example.com").await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "name": "Other", "email": "ana@example.com", "password": "different" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "DUPLICATE_EMAIL");
}

#[actix_web::test]
async fn test_register_invalid_input_is_forbidden() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let cases = [
        json!({ "name": "", "email": "ana@example.com", "password": "pw" }),
        json!({ "name": "Ana", "email": "not-an-email", "password": "pw" }),
        json!({ "name": "Ana", "email": "ana@example.com", "password": "" }),
        json!({ "name": "x".repeat(251), "email": "ana@example.com", "password": "pw" }),
        json!({ "name": "Ana", "password": "pw" }),
        json!({ "name": "Ana", "email": 42, "password": "pw" }),
        json!({}),
    ];

    for case in cases {
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(&case)
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "case {case}");
        assert_eq!(body["error"], "INVALID_INPUT");
    }
}

#[actix_web::test]
async fn test_login_outcomes() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (user_id, token) = register_and_login(&app, "Ana", "ana@example.com").await;

    let identity = ctx.tokens.validate(&token).unwrap();
    assert_eq!(identity.id, user_id);
    assert_eq!(identity.email, "ana@example.com");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "ana@example.com", "password": "wrong" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "INVALID_CREDENTIAL");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "hunter22" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_current_user_with_valid_token() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (user_id, token) = register_and_login(&app, "Ana", "ana@example.com").await;

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header((TOKEN_HEADER, token.as_str()))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": user_id, "name": "Ana", "email": "ana@example.com" }));
}

#[actix_web::test]
async fn test_gate_rejections_share_one_body() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    let (user_id, token) = register_and_login(&app, "Ana", "ana@example.com").await;

    let expired = ctx.expired_token(&Identity::new(user_id, "Ana", "ana@example.com"));
    let mut tampered = token.clone();
    tampered.push('x');

    let mut bodies = Vec::new();

    let req = test::TestRequest::get().uri("/user").to_request();
    bodies.push(send(&app, req).await);

    for bad in ["garbage", "", expired.as_str(), tampered.as_str()] {
        let req = test::TestRequest::get()
            .uri("/user")
            .insert_header((TOKEN_HEADER, bad))
            .to_request();
        bodies.push(send(&app, req).await);
    }

    for (status, body) in &bodies {
        assert_eq!(*status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, &bodies[0].1);
    }
    assert_eq!(bodies[0].1["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_token_for_deleted_user_is_not_found() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    // Signed correctly, but nobody with this id exists
    let token = ctx
        .tokens
        .issue(&Identity::new(999, "Ghost", "ghost@example.com"))
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header((TOKEN_HEADER, token))
        .to_request();
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_index_health_and_unknown_route() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["auth_header"], "Token");

    let (status, body) = send(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");

    let (status, body) = send(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_health_reports_unavailable_database() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    ctx.pool.close().await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "down");
}

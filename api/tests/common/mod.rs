//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::{to_bytes, MessageBody},
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    test, web, App,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use ck_api::middleware::TOKEN_HEADER;
use ck_api::{create_app, AppState};
use ck_core::domain::value_objects::Identity;
use ck_core::services::{
    AuthService, AuthServiceConfig, FavoriteService, FavoriteServiceConfig, TokenService,
    TokenServiceConfig,
};
use ck_infra::{DatabasePool, SqliteFavoriteRepository, SqliteUserRepository};
use ck_shared::CorsConfig;

pub const SECRET: &str = "api-integration-secret";

/// Everything needed to build a fresh application over an in-memory database
pub struct TestContext {
    pub pool: DatabasePool,
    pub state: web::Data<AppState<SqliteUserRepository, SqliteFavoriteRepository>>,
    pub tokens: web::Data<TokenService>,
    pub cors: CorsConfig,
}

impl TestContext {
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory().await.expect("in-memory pool");
        let users = Arc::new(SqliteUserRepository::new(pool.get_pool().clone()));
        let favorites = Arc::new(SqliteFavoriteRepository::new(pool.get_pool().clone()));

        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(SECRET)));
        let auth_service = Arc::new(AuthService::new(
            users,
            tokens.clone(),
            AuthServiceConfig { bcrypt_cost: 4 },
        ));
        let favorite_service = Arc::new(FavoriteService::new(
            favorites,
            FavoriteServiceConfig::default(),
        ));

        Self {
            pool,
            state: web::Data::new(AppState::new(auth_service, favorite_service)),
            tokens: web::Data::from(tokens),
            cors: CorsConfig::default(),
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        create_app(
            self.state.clone(),
            self.tokens.clone(),
            web::Data::new(self.pool.clone()),
            &self.cors,
        )
    }

    /// Token that expired a day ago for the given identity
    pub fn expired_token(&self, identity: &Identity) -> String {
        self.tokens
            .issue_at(identity, Utc::now() - Duration::days(31))
            .expect("issue token")
    }
}

/// Send a request and return the status and JSON body
///
/// Middleware rejections surface as service errors; they are rendered the
/// same way the server would render them.
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let body = test::read_body(resp).await;
            (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let body = to_bytes(resp.into_body()).await.expect("error body");
            (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
        }
    }
}

/// Register an account and log in, returning the user id and a token
pub async fn register_and_login<S, B>(app: &S, name: &str, email: &str) -> (i64, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "name": name, "email": email, "password": "hunter22" }))
        .to_request();
    let (status, user) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {user}");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": "hunter22" }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    (
        user["id"].as_i64().expect("user id"),
        body["token"].as_str().expect("token").to_string(),
    )
}

/// Create a favorite as the token holder
pub async fn create_favorite<S, B>(app: &S, token: &str, url: &str, title: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/favorite")
        .insert_header((TOKEN_HEADER, token))
        .set_json(json!({ "url": url, "title": title }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

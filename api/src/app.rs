//! Application factory
//!
//! Builds the actix-web application: shared state, JSON/query error
//! handling, request tracing, CORS and the route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use ck_core::repositories::{FavoriteRepository, UserRepository};
use ck_core::services::token::TokenService;
use ck_infra::DatabasePool;
use ck_shared::config::CorsConfig;
use ck_shared::{error_codes, ErrorResponse};

use crate::handlers::error::{
    json_error_handler, query_error_handler, registration_json_error_handler,
};
use crate::middleware::{auth::TokenAuth, cors::create_cors};
use crate::routes::auth::{login::login, me::current_user, register::register};
use crate::routes::favorites::{
    create::create_favorite,
    delete::delete_favorite,
    fetch::{get_favorite, list_favorites, my_favorites},
    like::like_favorite,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, F>(
    app_state: web::Data<AppState<U, F>>,
    token_service: web::Data<TokenService>,
    database: web::Data<DatabasePool>,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    App::new()
        // Shared state; the token service is also read by the auth middleware
        .app_data(app_state)
        .app_data(token_service)
        .app_data(database)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Middleware (outermost last): CORS, then per-request tracing spans
        .wrap(create_cors(cors_config))
        .wrap(TracingLogger::default())
        // Service endpoints
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        // Accounts
        .service(
            web::resource("/register")
                .app_data(web::JsonConfig::default().error_handler(registration_json_error_handler))
                .route(web::post().to(register::<U, F>)),
        )
        .route("/login", web::post().to(login::<U, F>))
        .route(
            "/user",
            web::get().to(current_user::<U, F>).wrap(TokenAuth::new()),
        )
        // Favorites
        .route(
            "/favorite",
            web::post().to(create_favorite::<U, F>).wrap(TokenAuth::new()),
        )
        .route("/favorite", web::get().to(get_favorite::<U, F>))
        .route(
            "/favorite",
            web::delete().to(delete_favorite::<U, F>).wrap(TokenAuth::new()),
        )
        .route("/favorite/like", web::post().to(like_favorite::<U, F>))
        .route("/favorites", web::get().to(list_favorites::<U, F>))
        .route(
            "/my-favorites",
            web::get().to(my_favorites::<U, F>).wrap(TokenAuth::new()),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// `503` when the database does not answer.
async fn health_check(database: web::Data<DatabasePool>) -> HttpResponse {
    let database_ok = matches!(database.health_check().await, Ok(true));
    let mut response = if database_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response.json(serde_json::json!({
        "status": if database_ok { "healthy" } else { "unhealthy" },
        "database": if database_ok { "up" } else { "down" },
        "service": "clicaki-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Endpoint index
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Clicaki API",
        "auth_header": crate::middleware::auth::TOKEN_HEADER,
        "endpoints": {
            "health": { "path": "/health", "method": "GET" },
            "register": {
                "path": "/register",
                "method": "POST",
                "request_body": { "name": "string", "email": "string", "password": "string" },
                "responses": { "201": "Account created", "403": "Invalid input", "409": "Email already registered" }
            },
            "login": {
                "path": "/login",
                "method": "POST",
                "request_body": { "email": "string", "password": "string" },
                "responses": { "200": "Token issued", "404": "Email not found", "409": "Invalid password" }
            },
            "current_user": { "path": "/user", "method": "GET", "requires_auth": true },
            "create_favorite": {
                "path": "/favorite",
                "method": "POST",
                "requires_auth": true,
                "request_body": { "url": "absolute URL", "title": "string", "description": "string (optional, max 250)", "likes": "integer >= 0 (optional)" }
            },
            "get_favorite": { "path": "/favorite?id={id}", "method": "GET" },
            "delete_favorite": { "path": "/favorite?id={id}", "method": "DELETE", "requires_auth": true },
            "like_favorite": { "path": "/favorite/like?id={id}", "method": "POST" },
            "list_favorites": { "path": "/favorites?page={page}", "method": "GET" },
            "my_favorites": { "path": "/my-favorites", "method": "GET", "requires_auth": true }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

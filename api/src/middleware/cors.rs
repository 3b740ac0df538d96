//! CORS middleware configuration for cross-origin requests.
//!
//! The browser front-end sends the identity token in a custom `Token`
//! header, so that header must be allowed explicitly. Origins come from
//! [`CorsConfig`]: an empty list (or `*`) accepts any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ck_shared::config::CorsConfig;

use super::auth::TOKEN_HEADER;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("token"),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS for any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin, "Adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    tracing::debug!(header = TOKEN_HEADER, "CORS allows the token header");
    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_preflight_allows_token_header() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::default()))
                .route("/favorite", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/favorite")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_restricted_origin_rejected() {
        let config = CorsConfig {
            allowed_origins: vec!["https://clicaki.app".to_string()],
            max_age: 60,
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/favorites", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/favorites")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        if let Ok(resp) = test::try_call_service(&app, req).await {
            assert!(!resp
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        }
    }
}

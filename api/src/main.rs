use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use ck_api::{create_app, telemetry, AppState};
use ck_core::services::{
    AuthService, AuthServiceConfig, FavoriteService, FavoriteServiceConfig, TokenService,
    TokenServiceConfig,
};
use ck_infra::{DatabasePool, SqliteFavoriteRepository, SqliteUserRepository};
use ck_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting Clicaki API server");

    let pool = DatabasePool::connect(config.database.clone())
        .await
        .context("failed to open the database")?;

    let user_repository = Arc::new(SqliteUserRepository::new(pool.get_pool().clone()));
    let favorite_repository = Arc::new(SqliteFavoriteRepository::new(pool.get_pool().clone()));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service.clone(),
        AuthServiceConfig::from(&config.auth.password),
    ));
    let favorite_service = Arc::new(FavoriteService::new(
        favorite_repository,
        FavoriteServiceConfig::from(&config.favorites),
    ));

    let app_state = web::Data::new(AppState::new(auth_service, favorite_service));
    let token_data = web::Data::from(token_service);
    let database = web::Data::new(pool.clone());
    let cors_config = config.cors.clone();

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(
            app_state.clone(),
            token_data.clone(),
            database.clone(),
            &cors_config,
        )
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

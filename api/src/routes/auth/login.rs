use actix_web::{web, HttpResponse};
use validator::Validate;

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Handler for POST /login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// ## Errors
/// - 404 Not Found: Email not registered
/// - 409 Conflict: Wrong password
pub async fn login<U, F>(
    state: web::Data<AppState<U, F>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let request = body.into_inner();
    request.validate()?;

    let outcome = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        token: outcome.token,
    }))
}

use actix_web::{web, HttpResponse};
use validator::Validate;

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Handler for POST /register
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "email": "ana@example.com", "password": "..." }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "id": 1, "name": "Ana", "email": "ana@example.com" }
/// ```
///
/// ## Errors
/// - 403 Forbidden: Invalid name, email or password
/// - 409 Conflict: Email already registered
pub async fn register<U, F>(
    state: web::Data<AppState<U, F>>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| ApiError::from(e).input_forbidden())?;

    let identity = state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
        .map_err(ApiError::for_registration)?;

    Ok(HttpResponse::Created().json(UserResponse::from(identity)))
}

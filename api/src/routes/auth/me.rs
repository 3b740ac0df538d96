use actix_web::{web, HttpResponse};

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::UserResponse;
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /user
///
/// Returns the account behind the `Token` header; `404` if it no longer
/// exists.
pub async fn current_user<U, F>(
    state: web::Data<AppState<U, F>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let identity = state.auth_service.find_by_id(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(identity)))
}

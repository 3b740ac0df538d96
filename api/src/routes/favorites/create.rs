use actix_web::{web, HttpResponse};
use validator::Validate;

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::{CreateFavoriteRequest, FavoriteResponse};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for POST /favorite
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.rust-lang.org", "title": "Rust", "description": "optional", "likes": 0 }
/// ```
///
/// The favorite is owned by the token holder. Responds `201` with the stored
/// favorite, `400` on invalid input.
pub async fn create_favorite<U, F>(
    state: web::Data<AppState<U, F>>,
    auth: AuthContext,
    body: web::Json<CreateFavoriteRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let request = body.into_inner();
    request.validate()?;

    let favorite = state
        .favorite_service
        .create(Some(&auth.identity), request.into())
        .await?;

    Ok(HttpResponse::Created().json(FavoriteResponse::from(favorite)))
}

use actix_web::{web, HttpResponse};

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::{FavoriteIdQuery, FavoriteResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Handler for POST /favorite/like?id=N
///
/// Adds exactly one like and returns the updated favorite.
pub async fn like_favorite<U, F>(
    state: web::Data<AppState<U, F>>,
    query: web::Query<FavoriteIdQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let favorite = state.favorite_service.like(query.id).await?;
    Ok(HttpResponse::Ok().json(FavoriteResponse::from(favorite)))
}

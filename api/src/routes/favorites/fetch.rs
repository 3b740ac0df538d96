use actix_web::{web, HttpResponse};

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::{FavoriteIdQuery, FavoriteListResponse, FavoriteResponse, MyFavoritesResponse, PageQuery};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /favorite?id=N
pub async fn get_favorite<U, F>(
    state: web::Data<AppState<U, F>>,
    query: web::Query<FavoriteIdQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let favorite = state.favorite_service.get(query.id).await?;
    Ok(HttpResponse::Ok().json(FavoriteResponse::from(favorite)))
}

/// Handler for GET /favorites?page=N
///
/// Public listing, most recent first. An empty store answers `200` with an
/// empty array and `total_pages: 0`; `page < 1` is a `400`.
pub async fn list_favorites<U, F>(
    state: web::Data<AppState<U, F>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let page = state.favorite_service.list_recent(query.page()).await?;
    Ok(HttpResponse::Ok().json(FavoriteListResponse::from(page)))
}

/// Handler for GET /my-favorites
pub async fn my_favorites<U, F>(
    state: web::Data<AppState<U, F>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let favorites = state.favorite_service.list_by_owner(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(MyFavoritesResponse {
        favorites: favorites.into_iter().map(Into::into).collect(),
    }))
}

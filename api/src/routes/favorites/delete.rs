use actix_web::{web, HttpResponse};

use ck_core::repositories::{FavoriteRepository, UserRepository};

use crate::dto::{DeleteResponse, FavoriteIdQuery};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for DELETE /favorite?id=N
///
/// Responds `200 {"deleted": 1}`, or `404` when nothing matched (unknown id,
/// already deleted, or owned by someone else).
pub async fn delete_favorite<U, F>(
    state: web::Data<AppState<U, F>>,
    auth: AuthContext,
    query: web::Query<FavoriteIdQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    F: FavoriteRepository + 'static,
{
    let deleted = state
        .favorite_service
        .delete(query.id, &auth.identity)
        .await?;

    Ok(HttpResponse::Ok().json(DeleteResponse { deleted }))
}

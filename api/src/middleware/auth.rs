//! Token authentication middleware for protecting API endpoints.
//!
//! The middleware reads the signed token from the `Token` header, validates
//! it with the [`TokenService`] registered as app data, and injects the
//! resolved [`AuthContext`] into the request extensions. Every failure is
//! answered with the same `401` body.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderMap,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    task::{Context, Poll},
};

use ck_core::domain::value_objects::Identity;
use ck_core::errors::TokenError;
use ck_core::services::token::TokenService;

use crate::handlers::error::ApiError;

/// Request header carrying the identity token
pub const TOKEN_HEADER: &str = "Token";

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Identity decoded from the token
    pub identity: Identity,
}

impl AuthContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Caller's user id
    pub fn user_id(&self) -> i64 {
        self.identity.id
    }
}

impl Deref for AuthContext {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

/// Resolve the caller's identity from request headers
///
/// # Returns
///
/// * `Err(TokenError::MissingToken)` - No `Token` header
/// * `Err(TokenError::Malformed)` - Empty or non-ASCII header value
/// * any error from [`TokenService::validate`]
pub fn authorize(headers: &HeaderMap, tokens: &TokenService) -> Result<Identity, TokenError> {
    let value = headers.get(TOKEN_HEADER).ok_or(TokenError::MissingToken)?;
    let token = value
        .to_str()
        .map_err(|_| TokenError::Malformed)?
        .trim();
    if token.is_empty() {
        return Err(TokenError::Malformed);
    }

    tokens.validate(token)
}

/// Token authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenAuth;

impl TokenAuth {
    /// Creates a new token authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Token authentication middleware service
pub struct TokenAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(tokens) = req.app_data::<web::Data<TokenService>>() else {
                tracing::error!("TokenService is not registered as app data");
                return Err(ApiError::internal().into());
            };

            let identity = match authorize(req.headers(), tokens) {
                Ok(identity) => identity,
                Err(e) => {
                    tracing::warn!(path = %req.path(), reason = %e, "Unauthorized request");
                    return Err(ApiError::from(e).into());
                }
            };

            tracing::debug!(user_id = identity.id, "Authorized request");
            req.extensions_mut().insert(AuthContext::new(identity));

            service.call(req).await
        })
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized().into());

        ready(result)
    }
}

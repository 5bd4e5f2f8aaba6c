use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;
use crate::error::AppError;
use crate::session::SESSION_COOKIE;

/// Extractor that resolves the session cookie into the authenticated
/// account's phone number. Handlers that take a `SessionUser` reject
/// cookie-less or stale-token requests before touching the store.
pub struct SessionUser {
    pub phone: String,
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

        let phone = state
            .sessions
            .resolve(token.value())
            .await
            .ok_or(AppError::Unauthorized)?;

        Ok(SessionUser { phone })
    }
}

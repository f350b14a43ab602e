//! Authentication middleware
//!
//! JWT bearer auth for the admin API, with a whitelist for the public
//! site endpoints.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Paths the marketing site calls without a session.
fn is_public(method: &http::Method, path: &str) -> bool {
    if matches!(
        path,
        "/api/health"
            | "/api/auth/login"
            | "/api/events/public"
            | "/api/menu/public"
            | "/api/gallery/public"
            | "/api/offers/public"
            | "/api/instagram/public"
            | "/api/reviews/approved"
            | "/api/reviews/featured"
    ) {
        return true;
    }
    // public booking form and review submission
    if method == http::Method::POST && matches!(path, "/api/reservations" | "/api/reviews/submit") {
        return true;
    }
    // customer self-service lookup by confirmation code
    path.starts_with("/api/reservations/code/")
}

/// Requires a valid `Authorization: Bearer <token>` header on every
/// `/api/` route that is not whitelisted. On success the
/// [`CurrentUser`] is injected into request extensions.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight never carries credentials
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // non-API routes (image serving, 404s) pass through
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public(req.method(), path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::Unauthorized);
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims).map_err(|_| AppError::InvalidToken)?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Token rejected");
            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// Handler-level extractor; falls back to validating the header itself
/// when the middleware has not run (e.g. in isolated router tests).
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token =
            JwtService::extract_from_header(auth_header).ok_or(AppError::InvalidToken)?;

        match state.jwt_service.validate_token(token) {
            Ok(claims) => {
                let user =
                    CurrentUser::try_from(claims).map_err(|_| AppError::InvalidToken)?;
                parts.extensions.insert(user.clone());
                Ok(user)
            }
            Err(JwtError::ExpiredToken) => Err(AppError::TokenExpired),
            Err(_) => Err(AppError::InvalidToken),
        }
    }
}

/// Optional variant for endpoints that serve both the public site and
/// the back office (e.g. the booking form). Yields `None` instead of
/// rejecting when no valid token is present.
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<ServerState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(
            CurrentUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_covers_the_public_site() {
        let get = http::Method::GET;
        let post = http::Method::POST;

        assert!(is_public(&get, "/api/health"));
        assert!(is_public(&post, "/api/auth/login"));
        assert!(is_public(&get, "/api/menu/public"));
        assert!(is_public(&post, "/api/reservations"));
        assert!(is_public(&get, "/api/reservations/code/AB12CD34"));
        assert!(is_public(&post, "/api/reviews/submit"));
        assert!(is_public(&get, "/api/reviews/approved"));

        assert!(!is_public(&get, "/api/reservations"));
        assert!(!is_public(&get, "/api/dashboard/stats"));
        assert!(!is_public(&post, "/api/events"));
        assert!(!is_public(&get, "/api/reviews"));
    }
}

/**
 * Authentication Middleware and Extractors
 *
 * This module resolves the session cookie into a user identity and
 * gates the admin-only routes.
 *
 * Identity is carried as explicit per-request data: the extractors
 * re-fetch the user row on every request, and handlers receive the
 * resolved identity as an argument rather than reading ambient login
 * state.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::sessions::{user_id_from_claims, verify_session_token, SESSION_COOKIE};
use crate::auth::users::{get_user_by_id, User};
use crate::error::AppError;
use crate::server::state::AppState;

/// Authenticated user data resolved from the session cookie
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// Resolve the session cookie to a user record
///
/// Returns `None` for a missing cookie, a bad or expired signature, or
/// a token whose user no longer exists. Database failures propagate.
pub async fn resolve_session_user(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Option<User>, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let claims = match verify_session_token(&state.config.session_secret, cookie.value()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Session token rejected: {:?}", e);
            return Ok(None);
        }
    };

    let Some(user_id) = user_id_from_claims(&claims) else {
        tracing::warn!("Session token with malformed subject");
        return Ok(None);
    };

    // Re-fetch on every request so a deleted account ends its session.
    let user = get_user_by_id(&state.db_pool, user_id).await?;
    Ok(user)
}

/// Optional current user, for pages that render for everyone
///
/// Extracts to `None` when the request carries no valid session.
pub struct OptionalUser(pub Option<User>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let user = resolve_session_user(state, &jar).await?;
        Ok(OptionalUser(user))
    }
}

/// Admin gate middleware
///
/// Layered onto the post-mutating routes. The request is rejected with
/// `Forbidden` before the wrapped handler runs unless the session
/// resolves to a user holding the admin flag; on success the resolved
/// identity is attached to the request extensions for the handler.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve_session_user(&state, &jar).await?;

    let user = match user {
        Some(user) if user.is_admin => user,
        Some(user) => {
            tracing::warn!("Non-admin user {} rejected from admin route", user.email);
            return Err(AppError::Forbidden);
        }
        None => {
            tracing::warn!("Anonymous request rejected from admin route");
            return Err(AppError::Forbidden);
        }
    };

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(&user));

    Ok(next.run(request).await)
}

/// Axum extractor for the identity attached by [`require_admin`]
///
/// Used as a handler parameter on admin routes to receive the resolved
/// admin identity.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AppError::Forbidden
            })?;

        Ok(AuthUser(user))
    }
}

/**
 * Application Error Types
 *
 * This module defines the error taxonomy for the blog server.
 * Errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Recoverable errors
 *
 * Validation and authentication errors are normally handled inside the
 * handler that produced them (a re-rendered form or a redirect) and do
 * not reach the `IntoResponse` conversion.
 *
 * ## Request-fatal errors
 *
 * Authorization failures and missing records abort the request with a
 * rendered error page:
 * - `Forbidden` - 403, admin-only route reached by a non-admin session
 * - `NotFound` - 404, unknown post id or unknown route
 *
 * ## Infrastructure errors
 *
 * Database, session-token, and password-hashing failures map to 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::forms::FormErrors;

/// Application error type
///
/// This enum represents all failure modes of the blog server. Each
/// variant maps to an HTTP status code via [`AppError::status_code`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration attempted with an email that already has an account.
    ///
    /// Produced by the UNIQUE constraint on `users.email`, never by an
    /// application-level existence check.
    #[error("email is already registered")]
    DuplicateEmail,

    /// Post created or renamed to a title another post already holds.
    #[error("a post with this title already exists")]
    DuplicateTitle,

    /// Login attempted with an email that has no account.
    #[error("no account with this email")]
    UserNotFound,

    /// Login attempted with a wrong password.
    #[error("incorrect password")]
    InvalidCredentials,

    /// Admin-only route reached without an admin session.
    #[error("forbidden")]
    Forbidden,

    /// Post (or route) does not exist.
    #[error("not found")]
    NotFound,

    /// Submitted form failed structural validation.
    #[error("validation failed")]
    Validation(FormErrors),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session token error (signing or verification)
    #[error("session error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AppError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateEmail` / `DuplicateTitle` - 409 Conflict
    /// - `UserNotFound` / `InvalidCredentials` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Database` / `Session` / `Hash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail | Self::DuplicateTitle => StatusCode::CONFLICT,
            Self::UserNotFound | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Session(_) | Self::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-facing message for this error
    ///
    /// Infrastructure errors are collapsed to a generic message so that
    /// internals are not leaked to clients. The full error is logged at
    /// the conversion site.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Session(_) | Self::Hash(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Check whether a sqlx error is a UNIQUE constraint violation
///
/// Used by write paths to translate a constraint conflict into the
/// matching domain error (`DuplicateEmail`, `DuplicateTitle`) instead of
/// surfacing a 500.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

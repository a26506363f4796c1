/**
 * Login Handlers
 *
 * GET /login renders the login form; POST /login accepts it.
 *
 * # Authentication Process
 *
 * 1. Validate the form
 * 2. Look up the user by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Establish the session cookie and redirect to the index
 *
 * An unknown email and a wrong password stay distinct outcomes, each
 * re-rendering the form with its own notice. Password verification is
 * `bcrypt::verify`, which compares in constant time.
 */

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::auth::handlers::register::session_cookie;
use crate::auth::sessions::create_session_token;
use crate::auth::users::{get_user_by_email, User};
use crate::error::AppError;
use crate::forms::{validate_login, FormErrors, LoginForm};
use crate::pages;
use crate::server::state::AppState;

/// Check credentials against the user table
///
/// # Errors
///
/// * `UserNotFound` - no account with this email
/// * `InvalidCredentials` - the password hash check failed
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let user = get_user_by_email(pool, email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let valid = verify(password, &user.password_hash)?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}

/// Render the login form
pub async fn login_form() -> Html<String> {
    Html(pages::login_page(
        &LoginForm::default(),
        &FormErrors::new(),
        None,
    ))
}

/// Accept a login submission
///
/// # Errors
///
/// * `422` - validation failure, form re-rendered with field errors
/// * `401` - unknown email or wrong password, form re-rendered with a
///   notice; no session cookie is set
/// * `500` - database or token signing failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    tracing::info!("Login request for email: {}", form.email);

    let errors = validate_login(&form);
    if !errors.is_empty() {
        tracing::warn!("Login form failed validation");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(pages::login_page(&form, &errors, None)),
        )
            .into_response());
    }

    let user = match authenticate(&state.db_pool, &form.email, &form.password).await {
        Ok(user) => user,
        Err(err @ (AppError::UserNotFound | AppError::InvalidCredentials)) => {
            tracing::warn!("Login rejected for {}: {}", form.email, err);
            let notice = match err {
                AppError::UserNotFound => "No account with this email. Register instead.",
                _ => "Incorrect password.",
            };
            return Ok((
                err.status_code(),
                Html(pages::login_page(&form, &FormErrors::new(), Some(notice))),
            )
                .into_response());
        }
        Err(err) => return Err(err),
    };

    let token = create_session_token(&state.config.session_secret, user.id, user.email.clone())?;

    tracing::info!("User logged in: {}", user.email);

    Ok((jar.add(session_cookie(token)), Redirect::to("/")).into_response())
}

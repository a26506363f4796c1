/**
 * Registration Handlers
 *
 * GET /register renders the registration form; POST /register accepts
 * it.
 *
 * # Registration Process
 *
 * 1. Validate the form (email shape, password length, name)
 * 2. Hash the password with bcrypt at the configured cost
 * 3. Insert the user; the UNIQUE constraint on email decides conflicts
 * 4. Establish the session cookie and redirect to the index
 *
 * A duplicate email re-renders the form with a notice pointing at the
 * login page instead. The first account ever registered becomes the
 * administrator.
 */

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use bcrypt::hash;

use crate::auth::sessions::{create_session_token, SESSION_COOKIE};
use crate::auth::users::create_user;
use crate::error::types::is_unique_violation;
use crate::error::AppError;
use crate::forms::{validate_register, FormErrors, RegisterForm};
use crate::pages;
use crate::server::state::AppState;

/// Build the session cookie for a fresh login
pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Render the registration form
pub async fn register_form() -> Html<String> {
    Html(pages::register_page(
        &RegisterForm::default(),
        &FormErrors::new(),
        None,
    ))
}

/// Accept a registration submission
///
/// # Errors
///
/// * `422` - validation failure, form re-rendered with field errors
/// * `409` - email already registered, form re-rendered with a notice
/// * `500` - hashing, token signing, or database failure
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    tracing::info!("Registration request for email: {}", form.email);

    // Validate the form
    let errors = validate_register(&form);
    if !errors.is_empty() {
        tracing::warn!("Registration form failed validation");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(pages::register_page(&form, &errors, None)),
        )
            .into_response());
    }

    // Hash password
    let password_hash = hash(&form.password, state.config.bcrypt_cost)?;

    // Insert; the email UNIQUE constraint resolves races
    let user = match create_user(
        &state.db_pool,
        form.email.clone(),
        password_hash,
        form.name.clone(),
    )
    .await
    {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Email already registered: {}", form.email);
            let err = AppError::DuplicateEmail;
            return Ok((
                err.status_code(),
                Html(pages::register_page(
                    &form,
                    &FormErrors::new(),
                    Some("This email is already registered. Log in instead."),
                )),
            )
                .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    // Establish the session
    let token = create_session_token(&state.config.session_secret, user.id, user.email.clone())?;

    tracing::info!(
        "User registered: {} (admin: {})",
        user.email,
        user.is_admin
    );

    Ok((jar.add(session_cookie(token)), Redirect::to("/")).into_response())
}

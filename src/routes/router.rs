/**
 * Router Configuration
 *
 * This module assembles the full route table.
 *
 * # Route Order
 *
 * 1. Public routes (index, post pages, auth, static pages)
 * 2. Admin routes, wrapped by the `require_admin` middleware
 * 3. Static file serving under /static
 * 4. Fallback handler (404 page)
 *
 * The admin gate is a route layer on the admin subtree only, so it
 * runs before those handlers and never touches the public routes.
 */

use axum::{
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::auth::handlers::{login, login_form, logout, register, register_form};
use crate::comments::handlers::add_comment;
use crate::middleware::auth::{require_admin, OptionalUser};
use crate::pages::{self, Viewer};
use crate::posts::handlers::{
    create_post, delete_post, edit_post_form, index, new_post_form, show_post, update_post,
};
use crate::server::state::AppState;

/// Static about page
async fn about(OptionalUser(user): OptionalUser) -> Html<String> {
    let viewer = user.as_ref().map(|u| Viewer {
        name: &u.name,
        is_admin: u.is_admin,
    });
    Html(pages::about(viewer))
}

/// Static contact page
async fn contact(OptionalUser(user): OptionalUser) -> Html<String> {
    let viewer = user.as_ref().map(|u| Viewer {
        name: &u.name,
        is_admin: u.is_admin,
    });
    Html(pages::contact(viewer))
}

/// 404 fallback for unknown routes
async fn not_found() -> Response {
    crate::error::AppError::NotFound.into_response()
}

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Public
///
/// - `GET /` - list all posts
/// - `GET /post/{id}` - post with comments; `POST` adds a comment
///   (requires a logged-in session)
/// - `GET|POST /register`, `GET|POST /login`, `GET /logout`
/// - `GET /about`, `GET /contact`
///
/// ## Admin only
///
/// - `GET|POST /new-post`
/// - `GET|POST /edit-post/{id}`
/// - `GET /delete/{id}`
///
/// ## Static files
///
/// Served from the `static` directory under `/static`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let admin_routes = Router::new()
        .route("/new-post", get(new_post_form).post(create_post))
        .route("/edit-post/{id}", get(edit_post_form).post(update_post))
        .route("/delete/{id}", get(delete_post))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_admin,
        ));

    Router::new()
        .route("/", get(index))
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .route("/post/{id}", get(show_post).post(add_comment))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .merge(admin_routes)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

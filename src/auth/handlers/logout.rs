/**
 * Logout Handler
 *
 * GET /logout clears the session cookie and redirects to the index.
 * The operation is unconditional and idempotent: logging out without a
 * session is the same redirect.
 */

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::auth::sessions::SESSION_COOKIE;

/// Clear the session and redirect to the index
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("Logout request");

    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");

    (jar.remove(cookie), Redirect::to("/"))
}

/**
 * Comment Handler
 *
 * POST /post/{id} accepts a comment on a post.
 *
 * Commenting requires a logged-in session: anonymous submissions are
 * redirected to the login page and the comment is discarded, not
 * queued. A valid comment is appended and the client is redirected
 * back to the post.
 */

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::comments::db;
use crate::error::AppError;
use crate::forms::{validate_comment, CommentForm};
use crate::middleware::auth::OptionalUser;
use crate::pages::{self, Viewer};
use crate::posts::db::get_post_by_id;
use crate::server::state::AppState;

/// Accept a comment submission on a post
///
/// # Errors
///
/// * `303` to `/login` - anonymous submission, comment discarded
/// * `404` - no post with this id
/// * `422` - validation failure, post page re-rendered with the error
pub async fn add_comment(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(post_id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let Some(user) = user else {
        tracing::warn!("Anonymous comment submission on post {post_id}, redirecting to login");
        return Ok(Redirect::to("/login").into_response());
    };

    let post = get_post_by_id(&state.db_pool, post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let errors = validate_comment(&form);
    if !errors.is_empty() {
        tracing::warn!("Comment form failed validation");
        let comments = db::list_comments_for_post(&state.db_pool, post_id).await?;
        let viewer = Viewer {
            name: &user.name,
            is_admin: user.is_admin,
        };
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(pages::post_detail(
                Some(viewer),
                &post,
                &comments,
                &form,
                &errors,
            )),
        )
            .into_response());
    }

    db::create_comment(&state.db_pool, post_id, user.id, form.text.trim()).await?;
    tracing::info!("Comment added to post {post_id} by {}", user.email);

    Ok(Redirect::to(&format!("/post/{post_id}")).into_response())
}

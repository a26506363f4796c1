/**
 * Post Handlers
 *
 * Controllers for reading and mutating blog posts.
 *
 * # Routes
 *
 * - `GET /` - list all posts
 * - `GET /post/{id}` - show one post with its comments
 * - `GET|POST /new-post` - create a post (admin)
 * - `GET|POST /edit-post/{id}` - edit a post (admin)
 * - `GET /delete/{id}` - delete a post and its comments (admin)
 *
 * The admin routes sit behind the `require_admin` middleware; their
 * handlers receive the resolved identity through the `AuthUser`
 * extractor. Unknown post ids are a 404 on every route that takes one.
 */

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::comments::db::list_comments_for_post;
use crate::error::types::is_unique_violation;
use crate::error::AppError;
use crate::forms::{validate_post, CommentForm, FormErrors, PostForm};
use crate::middleware::auth::{AuthUser, OptionalUser};
use crate::pages::{self, Viewer};
use crate::posts::db;
use crate::server::state::AppState;

/// List all posts
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<Html<String>, AppError> {
    let posts = db::list_posts(&state.db_pool).await?;
    let viewer = user.as_ref().map(|u| Viewer {
        name: &u.name,
        is_admin: u.is_admin,
    });
    Ok(Html(pages::index(viewer, &posts)))
}

/// Show a post with its comments
pub async fn show_post(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(post_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let post = db::get_post_by_id(&state.db_pool, post_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let comments = list_comments_for_post(&state.db_pool, post_id).await?;

    let viewer = user.as_ref().map(|u| Viewer {
        name: &u.name,
        is_admin: u.is_admin,
    });
    Ok(Html(pages::post_detail(
        viewer,
        &post,
        &comments,
        &CommentForm::default(),
        &FormErrors::new(),
    )))
}

/// Render the new-post form
pub async fn new_post_form(AuthUser(admin): AuthUser) -> Html<String> {
    let form = PostForm {
        author: admin.name.clone(),
        ..PostForm::default()
    };
    Html(pages::post_form_page(
        Some(Viewer {
            name: &admin.name,
            is_admin: true,
        }),
        "New Post",
        "/new-post",
        &form,
        &FormErrors::new(),
        None,
    ))
}

/// Accept a new-post submission
///
/// # Errors
///
/// * `422` - validation failure, form re-rendered
/// * `409` - duplicate title, form re-rendered with a notice
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    tracing::info!("New post submission: {}", form.title);

    let viewer = Viewer {
        name: &admin.name,
        is_admin: true,
    };

    let errors = validate_post(&form);
    if !errors.is_empty() {
        tracing::warn!("Post form failed validation");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(pages::post_form_page(
                Some(viewer),
                "New Post",
                "/new-post",
                &form,
                &errors,
                None,
            )),
        )
            .into_response());
    }

    match db::create_post(&state.db_pool, &form, admin.user_id).await {
        Ok(post) => {
            tracing::info!("Post created: {} (id {})", post.title, post.id);
            Ok(Redirect::to("/").into_response())
        }
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Duplicate post title: {}", form.title);
            let err = AppError::DuplicateTitle;
            Ok((
                err.status_code(),
                Html(pages::post_form_page(
                    Some(viewer),
                    "New Post",
                    "/new-post",
                    &form,
                    &FormErrors::new(),
                    Some("A post with this title already exists."),
                )),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Render the edit-post form, pre-filled from the stored post
pub async fn edit_post_form(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let post = db::get_post_by_id(&state.db_pool, post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let form = PostForm {
        title: post.title,
        subtitle: post.subtitle,
        img_url: post.img_url,
        author: post.author,
        body: post.body,
    };

    Ok(Html(pages::post_form_page(
        Some(Viewer {
            name: &admin.name,
            is_admin: true,
        }),
        "Edit Post",
        &format!("/edit-post/{post_id}"),
        &form,
        &FormErrors::new(),
        None,
    )))
}

/// Accept an edit-post submission
///
/// # Errors
///
/// * `404` - no post with this id
/// * `422` - validation failure, form re-rendered
/// * `409` - title collides with another post, form re-rendered
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Path(post_id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    tracing::info!("Edit submission for post {post_id}");

    let viewer = Viewer {
        name: &admin.name,
        is_admin: true,
    };
    let action = format!("/edit-post/{post_id}");

    let errors = validate_post(&form);
    if !errors.is_empty() {
        tracing::warn!("Post form failed validation");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(pages::post_form_page(
                Some(viewer),
                "Edit Post",
                &action,
                &form,
                &errors,
                None,
            )),
        )
            .into_response());
    }

    match db::update_post(&state.db_pool, post_id, &form).await {
        Ok(Some(post)) => {
            tracing::info!("Post updated: {} (id {})", post.title, post.id);
            Ok(Redirect::to(&format!("/post/{post_id}")).into_response())
        }
        Ok(None) => Err(AppError::NotFound),
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Duplicate post title on edit: {}", form.title);
            let err = AppError::DuplicateTitle;
            Ok((
                err.status_code(),
                Html(pages::post_form_page(
                    Some(viewer),
                    "Edit Post",
                    &action,
                    &form,
                    &FormErrors::new(),
                    Some("A post with this title already exists."),
                )),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a post and its comments, then return to the index
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Response, AppError> {
    tracing::info!("Delete request for post {post_id} by {}", admin.email);

    let deleted = db::delete_post(&state.db_pool, post_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    tracing::info!("Post {post_id} deleted");
    Ok(Redirect::to("/").into_response())
}

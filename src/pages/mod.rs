//! HTML Render Layer
//!
//! Formats fetched data into complete HTML pages. This layer is
//! deliberately dumb: it holds no application logic, performs no IO,
//! and every decision it renders (who is logged in, which errors to
//! show) arrives as an argument.
//!
//! Post bodies are rich text from the editor and are rendered as-is;
//! every other piece of user data is escaped.

use axum::http::StatusCode;

use crate::comments::db::CommentWithAuthor;
use crate::forms::{CommentForm, FormErrors, LoginForm, PostForm, RegisterForm};
use crate::posts::db::BlogPost;

/// The rendering view of the current session, for the navbar
#[derive(Debug, Clone, Copy)]
pub struct Viewer<'a> {
    pub name: &'a str,
    pub is_admin: bool,
}

/// Escape text for safe interpolation into HTML
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(viewer: Option<Viewer<'_>>) -> String {
    let mut links = String::from(r#"<a href="/">Home</a> <a href="/about">About</a> <a href="/contact">Contact</a>"#);
    match viewer {
        Some(v) => {
            if v.is_admin {
                links.push_str(r#" <a href="/new-post">New Post</a>"#);
            }
            links.push_str(&format!(
                r#" <a href="/logout">Log Out</a> <span class="nav-user">{}</span>"#,
                escape(v.name)
            ));
        }
        None => {
            links.push_str(r#" <a href="/login">Log In</a> <a href="/register">Register</a>"#);
        }
    }
    links
}

fn layout(title: &str, viewer: Option<Viewer<'_>>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/styles.css">
</head>
<body>
<nav class="navbar">{nav}</nav>
<main class="container">
{body}
</main>
<footer class="footer">Inkpost</footer>
</body>
</html>
"#,
        title = escape(title),
        nav = nav(viewer),
    )
}

fn field_error(errors: &FormErrors, field: &str) -> String {
    match errors.get(field) {
        Some(message) => format!(r#"<p class="field-error">{}</p>"#, escape(message)),
        None => String::new(),
    }
}

fn notice_html(notice: Option<&str>) -> String {
    match notice {
        Some(text) => format!(r#"<p class="notice">{}</p>"#, escape(text)),
        None => String::new(),
    }
}

/// The index page: all posts, storage order
pub fn index(viewer: Option<Viewer<'_>>, posts: &[BlogPost]) -> String {
    let mut items = String::new();
    for post in posts {
        items.push_str(&format!(
            r#"<article class="post-preview">
<h2><a href="/post/{id}">{title}</a></h2>
<h3>{subtitle}</h3>
<p class="post-meta">Posted by {author} on {date}</p>
</article>
"#,
            id = post.id,
            title = escape(&post.title),
            subtitle = escape(&post.subtitle),
            author = escape(&post.author),
            date = escape(&post.date),
        ));
    }
    if posts.is_empty() {
        items.push_str(r#"<p class="empty">No posts yet.</p>"#);
    }
    layout("Inkpost", viewer, &items)
}

/// A single post with its comments and, for logged-in readers, the
/// comment form
pub fn post_detail(
    viewer: Option<Viewer<'_>>,
    post: &BlogPost,
    comments: &[CommentWithAuthor],
    comment_form: &CommentForm,
    errors: &FormErrors,
) -> String {
    let mut comment_items = String::new();
    for comment in comments {
        comment_items.push_str(&format!(
            r#"<li class="comment"><span class="comment-author">{author}</span>: {text}</li>
"#,
            author = escape(&comment.author_name),
            text = escape(&comment.text),
        ));
    }

    let comment_section = if viewer.is_some() {
        format!(
            r#"<form class="comment-form" method="post" action="/post/{id}">
{text_error}<textarea name="text" rows="3">{text}</textarea>
<button type="submit">Submit Comment</button>
</form>"#,
            id = post.id,
            text_error = field_error(errors, "text"),
            text = escape(&comment_form.text),
        )
    } else {
        r#"<p><a href="/login">Log in</a> to leave a comment.</p>"#.to_string()
    };

    let body = format!(
        r#"<article class="post">
<img class="post-cover" src="{img_url}" alt="">
<h1>{title}</h1>
<h2>{subtitle}</h2>
<p class="post-meta">Posted by {author} on {date}</p>
<div class="post-body">{body}</div>
</article>
<section class="comments">
<h3>Comments</h3>
<ul>
{comment_items}</ul>
{comment_section}
</section>"#,
        img_url = escape(&post.img_url),
        title = escape(&post.title),
        subtitle = escape(&post.subtitle),
        author = escape(&post.author),
        date = escape(&post.date),
        body = post.body,
        comment_items = comment_items,
        comment_section = comment_section,
    );

    layout(&post.title, viewer, &body)
}

/// The registration form
pub fn register_page(form: &RegisterForm, errors: &FormErrors, notice: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Register</h1>
{notice}<form method="post" action="/register">
<label>Name</label>
{name_error}<input type="text" name="name" value="{name}">
<label>Email</label>
{email_error}<input type="text" name="email" value="{email}">
<label>Password</label>
{password_error}<input type="password" name="password" value="">
<button type="submit">Sign Up</button>
</form>
<p>Already have an account? <a href="/login">Log in</a>.</p>"#,
        notice = notice_html(notice),
        name_error = field_error(errors, "name"),
        name = escape(&form.name),
        email_error = field_error(errors, "email"),
        email = escape(&form.email),
        password_error = field_error(errors, "password"),
    );
    layout("Register", None, &body)
}

/// The login form
pub fn login_page(form: &LoginForm, errors: &FormErrors, notice: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Log In</h1>
{notice}<form method="post" action="/login">
<label>Email</label>
{email_error}<input type="text" name="email" value="{email}">
<label>Password</label>
{password_error}<input type="password" name="password" value="">
<button type="submit">Log In</button>
</form>
<p>New here? <a href="/register">Register</a>.</p>"#,
        notice = notice_html(notice),
        email_error = field_error(errors, "email"),
        email = escape(&form.email),
        password_error = field_error(errors, "password"),
    );
    layout("Log In", None, &body)
}

/// The shared new-post / edit-post form
pub fn post_form_page(
    viewer: Option<Viewer<'_>>,
    heading: &str,
    action: &str,
    form: &PostForm,
    errors: &FormErrors,
    notice: Option<&str>,
) -> String {
    let body = format!(
        r#"<h1>{heading}</h1>
{notice}<form method="post" action="{action}">
<label>Title</label>
{title_error}<input type="text" name="title" value="{title}">
<label>Subtitle</label>
{subtitle_error}<input type="text" name="subtitle" value="{subtitle}">
<label>Image URL</label>
{img_url_error}<input type="text" name="img_url" value="{img_url}">
<label>Author</label>
{author_error}<input type="text" name="author" value="{author}">
<label>Body</label>
{body_error}<textarea name="body" rows="12">{body}</textarea>
<button type="submit">Save Post</button>
</form>"#,
        heading = escape(heading),
        notice = notice_html(notice),
        action = escape(action),
        title_error = field_error(errors, "title"),
        title = escape(&form.title),
        subtitle_error = field_error(errors, "subtitle"),
        subtitle = escape(&form.subtitle),
        img_url_error = field_error(errors, "img_url"),
        img_url = escape(&form.img_url),
        author_error = field_error(errors, "author"),
        author = escape(&form.author),
        body_error = field_error(errors, "body"),
        body = escape(&form.body),
    );
    layout(heading, viewer, &body)
}

/// Static about page
pub fn about(viewer: Option<Viewer<'_>>) -> String {
    let body = r#"<h1>About</h1>
<p>Inkpost is a small personal blog. Posts are written by the site
owner; registered readers can join the conversation in the comments.</p>"#;
    layout("About", viewer, body)
}

/// Static contact page
pub fn contact(viewer: Option<Viewer<'_>>) -> String {
    let body = r#"<h1>Contact</h1>
<p>Questions or feedback? Reach the site owner at
<a href="mailto:owner@example.com">owner@example.com</a>.</p>"#;
    layout("Contact", viewer, body)
}

/// A rendered error page
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<h1>{code} {reason}</h1>
<p>{message}</p>
<p><a href="/">Back to the blog</a></p>"#,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape(message),
    );
    layout("Error", None, &body)
}

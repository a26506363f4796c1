//! Form Schemas and Validation
//!
//! This module defines the submitted-form types and their structural
//! validation. Every mutating handler validates its form here before
//! touching the database; a failed validation re-renders the form with
//! field-level errors and performs no write.
//!
//! # Validation Rules
//!
//! - **Registration**: email required with a basic shape check, at most
//!   200 chars; password required, at least 8 chars; name required, at
//!   most 250 chars.
//! - **Login**: email required with shape check; password required.
//! - **Post form**: title, subtitle, image URL, author and body all
//!   required; the single-line fields capped at 250 chars.
//! - **Comment**: text required, at most 300 chars.

use serde::{Deserialize, Serialize};

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the error is attached to
    pub field: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Collected validation errors for one submitted form
///
/// Empty means the form passed validation. Errors keep submission
/// order so the rendered form lists them stably.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error to a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error message for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over all field errors
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Registration form
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegisterForm {
    /// Email address, unique per account
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
    /// Display name
    pub name: String,
}

/// Login form
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginForm {
    /// Email address of the account
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Post creation / edit form
///
/// The same schema serves the new-post and edit-post flows; the post
/// date is assigned server-side and is not part of the form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub author: String,
    pub body: String,
}

/// Comment form
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CommentForm {
    pub text: String,
}

/// Check email shape: something before and after a single '@'
///
/// This is a structural check only, not RFC validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}

/// Validate a registration form
pub fn validate_register(form: &RegisterForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.add("email", "Enter a valid email address");
    } else if form.email.len() > 200 {
        errors.add("email", "Email must be at most 200 characters");
    }

    if form.password.is_empty() {
        errors.add("password", "Password is required");
    } else if form.password.len() < 8 {
        errors.add("password", "Password must be at least 8 characters");
    }

    if form.name.trim().is_empty() {
        errors.add("name", "Name is required");
    } else if form.name.len() > 250 {
        errors.add("name", "Name must be at most 250 characters");
    }

    errors
}

/// Validate a login form
pub fn validate_login(form: &LoginForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.add("email", "Enter a valid email address");
    }

    if form.password.is_empty() {
        errors.add("password", "Password is required");
    }

    errors
}

/// Validate a post form (shared by create and edit)
pub fn validate_post(form: &PostForm) -> FormErrors {
    let mut errors = FormErrors::new();

    for (field, value) in [
        ("title", &form.title),
        ("subtitle", &form.subtitle),
        ("img_url", &form.img_url),
        ("author", &form.author),
    ] {
        if value.trim().is_empty() {
            errors.add(field, format!("{} is required", field_label(field)));
        } else if value.len() > 250 {
            errors.add(
                field,
                format!("{} must be at most 250 characters", field_label(field)),
            );
        }
    }

    if form.body.trim().is_empty() {
        errors.add("body", "Body is required");
    }

    errors
}

/// Validate a comment form
pub fn validate_comment(form: &CommentForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.text.trim().is_empty() {
        errors.add("text", "Comment text is required");
    } else if form.text.len() > 300 {
        errors.add("text", "Comment must be at most 300 characters");
    }

    errors
}

fn field_label(field: &str) -> &'static str {
    match field {
        "title" => "Title",
        "subtitle" => "Subtitle",
        "img_url" => "Image URL",
        "author" => "Author",
        _ => "Field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_register_form() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            name: "User Name".to_string(),
        };
        assert!(validate_register(&form).is_empty());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        for email in ["", "no-at-sign", "@nodomain", "nolocal@", "two@@ats"] {
            let form = RegisterForm {
                email: email.to_string(),
                password: "password123".to_string(),
                name: "User".to_string(),
            };
            let errors = validate_register(&form);
            assert!(errors.get("email").is_some(), "accepted {email:?}");
        }
    }

    #[test]
    fn test_register_rejects_short_password() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
            name: "User".to_string(),
        };
        let errors = validate_register(&form);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_register_requires_name() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            name: "   ".to_string(),
        };
        assert!(validate_register(&form).get("name").is_some());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(&LoginForm::default());
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_post_form_all_fields_required() {
        let errors = validate_post(&PostForm::default());
        for field in ["title", "subtitle", "img_url", "author", "body"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_post_form_valid() {
        let form = PostForm {
            title: "A Title".to_string(),
            subtitle: "A subtitle".to_string(),
            img_url: "https://example.com/cover.jpg".to_string(),
            author: "Author".to_string(),
            body: "<p>Body text</p>".to_string(),
        };
        assert!(validate_post(&form).is_empty());
    }

    #[test]
    fn test_comment_length_bound() {
        let form = CommentForm {
            text: "x".repeat(301),
        };
        assert!(validate_comment(&form).get("text").is_some());

        let form = CommentForm {
            text: "x".repeat(300),
        };
        assert!(validate_comment(&form).is_empty());
    }

    #[test]
    fn test_form_errors_first_match_wins() {
        let mut errors = FormErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.iter().count(), 2);
    }
}

/**
 * Error Conversion
 *
 * This module provides the conversion from `AppError` to an HTTP
 * response, allowing handlers to return `Result<_, AppError>` and
 * propagate failures with the `?` operator.
 *
 * # Response Format
 *
 * Errors are rendered as a plain error page through the `pages` layer
 * with the status code from `AppError::status_code`. Infrastructure
 * errors are logged with their full detail before the generic page is
 * returned.
 */

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::types::AppError;
use crate::pages;

impl IntoResponse for AppError {
    /// Convert an application error into an HTTP response
    ///
    /// The response is a rendered error page with the appropriate
    /// status code. Internal failures are logged here, at the single
    /// point every unhandled error flows through.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        } else {
            tracing::warn!("request rejected ({}): {self}", status.as_u16());
        }

        let body = pages::error_page(status, &self.message());
        (status, Html(body)).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::preferences::theme::PreferenceError;
use crate::profile::validation::FieldErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unknown job id. Rendered with a link back to the listing.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Profile draft failed one or more field rules; the draft stays open.
    #[error("Profile is invalid: {0:?}")]
    InvalidProfile(FieldErrors),

    #[error("No profile edit in progress")]
    NoActiveDraft,

    #[error("Preference store error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::JobNotFound(id) => (
                StatusCode::NOT_FOUND,
                "JOB_NOT_FOUND",
                format!("No job with id '{id}'"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidProfile(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PROFILE_INVALID",
                "One or more profile fields are invalid".to_string(),
            ),
            AppError::NoActiveDraft => (
                StatusCode::CONFLICT,
                "NO_ACTIVE_DRAFT",
                "Open the profile editor before changing the draft".to_string(),
            ),
            AppError::Preferences(e) => {
                tracing::error!("Preference store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PREFERENCES_ERROR",
                    "Could not persist preferences".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        match &self {
            AppError::NotFound(_) => error["home"] = json!("/"),
            AppError::JobNotFound(_) => error["back"] = json!("/jobs"),
            AppError::InvalidProfile(fields) => error["fields"] = json!(fields),
            _ => {}
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

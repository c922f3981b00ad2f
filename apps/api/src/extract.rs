use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::errors::AppError;

/// `Json` extractor whose rejections use the `AppError` envelope instead of
/// axum's plain-text 4xx bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

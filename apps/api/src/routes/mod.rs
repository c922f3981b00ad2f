pub mod health;
pub mod home;

use axum::{
    http::Uri,
    routing::{delete, get, post},
    Router,
};
use tracing::warn;

use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::preferences::handlers as preferences;
use crate::profile::handlers as profile;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    warn!("Unmatched route: {}", uri.path());
    AppError::NotFound(format!("No page at {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/home", get(home::handle_home))
        // Jobs
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Profile
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/profile/edit", post(profile::handle_open_draft))
        .route(
            "/api/v1/profile/draft",
            get(profile::handle_get_draft).patch(profile::handle_patch_draft),
        )
        .route(
            "/api/v1/profile/draft/skills",
            post(profile::handle_add_skill),
        )
        .route(
            "/api/v1/profile/draft/skills/:skill",
            delete(profile::handle_remove_skill),
        )
        .route(
            "/api/v1/profile/draft/save",
            post(profile::handle_save_draft),
        )
        .route(
            "/api/v1/profile/draft/cancel",
            post(profile::handle_cancel_draft),
        )
        // Preferences
        .route(
            "/api/v1/preferences/theme",
            get(preferences::handle_get_theme).put(preferences::handle_set_theme),
        )
        .route(
            "/api/v1/preferences/theme/toggle",
            post(preferences::handle_toggle_theme),
        )
        .fallback(not_found)
        .with_state(state)
}

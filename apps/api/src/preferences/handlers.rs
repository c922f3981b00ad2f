use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::preferences::theme::Theme;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub default: Theme,
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

/// GET /api/v1/preferences/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = *state.theme.read().await;
    Json(ThemeResponse {
        theme,
        default: state.config.default_theme,
    })
}

/// PUT /api/v1/preferences/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    AppJson(req): AppJson<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = req
        .theme
        .parse::<Theme>()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    store_theme(&state, |_| theme).await
}

/// POST /api/v1/preferences/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, AppError> {
    store_theme(&state, Theme::toggled).await
}

// Holds the write lock across the file write so concurrent toggles serialize.
async fn store_theme(
    state: &AppState,
    next: impl FnOnce(Theme) -> Theme,
) -> Result<Json<ThemeResponse>, AppError> {
    let mut current = state.theme.write().await;
    let theme = next(*current);
    state.preferences.save(theme).await?;
    *current = theme;
    Ok(Json(ThemeResponse {
        theme,
        default: state.config.default_theme,
    }))
}

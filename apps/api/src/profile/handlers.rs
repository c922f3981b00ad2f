use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::profile::UserProfile;
use crate::profile::session::{EditSession, ProfilePatch};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub initials: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let initials = profile.initials();
        ProfileResponse { profile, initials }
    }
}

#[derive(Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.provider.get_profile().await?;
    Ok(Json(profile.into()))
}

/// POST /api/v1/profile/edit
///
/// Opens a draft from the committed profile. An already-open draft is
/// returned as-is so unsaved edits survive re-opening the editor.
pub async fn handle_open_draft(
    State(state): State<AppState>,
) -> Result<Json<EditSession>, AppError> {
    let mut guard = state.edit_session.lock().await;
    if let Some(session) = guard.as_ref() {
        return Ok(Json(session.clone()));
    }
    let committed = state.provider.get_profile().await?;
    let session = EditSession::open(&committed);
    info!("Profile draft opened");
    *guard = Some(session.clone());
    Ok(Json(session))
}

/// GET /api/v1/profile/draft
pub async fn handle_get_draft(
    State(state): State<AppState>,
) -> Result<Json<EditSession>, AppError> {
    let guard = state.edit_session.lock().await;
    let session = guard.as_ref().ok_or(AppError::NoActiveDraft)?;
    debug!(pending_errors = session.errors().len(), "Profile draft read");
    Ok(Json(session.clone()))
}

/// PATCH /api/v1/profile/draft
pub async fn handle_patch_draft(
    State(state): State<AppState>,
    AppJson(patch): AppJson<ProfilePatch>,
) -> Result<Json<EditSession>, AppError> {
    let mut guard = state.edit_session.lock().await;
    let session = guard.as_mut().ok_or(AppError::NoActiveDraft)?;
    session.apply(patch);
    Ok(Json(session.clone()))
}

/// POST /api/v1/profile/draft/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    AppJson(req): AppJson<SkillRequest>,
) -> Result<Json<EditSession>, AppError> {
    let mut guard = state.edit_session.lock().await;
    let session = guard.as_mut().ok_or(AppError::NoActiveDraft)?;
    if session.add_skill(&req.skill) {
        debug!(skills = session.draft().skills.len(), "Skill added to draft");
    }
    Ok(Json(session.clone()))
}

/// DELETE /api/v1/profile/draft/skills/:skill
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<EditSession>, AppError> {
    let mut guard = state.edit_session.lock().await;
    let session = guard.as_mut().ok_or(AppError::NoActiveDraft)?;
    if session.remove_skill(&skill) {
        debug!(skills = session.draft().skills.len(), "Skill removed from draft");
    }
    Ok(Json(session.clone()))
}

/// POST /api/v1/profile/draft/save
///
/// Commits the draft only when every field rule passes. On failure the draft
/// stays open and the per-field messages are returned with a 422.
pub async fn handle_save_draft(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut guard = state.edit_session.lock().await;
    let session = guard.as_mut().ok_or(AppError::NoActiveDraft)?;

    let profile = match session.save() {
        Ok(profile) => profile,
        Err(errors) => {
            warn!("Profile save rejected: {} invalid field(s)", errors.len());
            for field in errors.fields() {
                let message = errors.get(field).unwrap_or_default();
                debug!(?field, message, "Field rejected");
            }
            return Err(AppError::InvalidProfile(errors));
        }
    };

    state.provider.save_profile(profile.clone()).await?;
    *guard = None;
    info!(skills = profile.skills.len(), "Profile saved");
    Ok(Json(profile.into()))
}

/// POST /api/v1/profile/draft/cancel
///
/// Discards any draft and returns the committed profile. Idempotent.
pub async fn handle_cancel_draft(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    if state.edit_session.lock().await.take().is_some() {
        info!("Profile draft discarded");
    }
    let profile = state.provider.get_profile().await?;
    Ok(Json(profile.into()))
}

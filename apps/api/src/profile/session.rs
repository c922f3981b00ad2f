//! Profile edit session: a draft copy of the committed profile.
//!
//! open → (edit fields | add/remove skills)* → save | cancel
//!
//! The draft never aliases the committed value. `save` hands back a profile to
//! commit only when validation passes; otherwise the session stays open with
//! its errors. Cancelling is dropping the session.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::profile::validation::{validate_profile, FieldErrors};

/// Partial update of the draft's scalar fields. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub title: Option<String>,
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditSession {
    draft: UserProfile,
    errors: FieldErrors,
}

impl EditSession {
    pub fn open(committed: &UserProfile) -> Self {
        EditSession {
            draft: committed.clone(),
            errors: FieldErrors::default(),
        }
    }

    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    /// Errors from the most recent rejected save.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            email,
            phone,
            location,
            bio,
            avatar,
            title,
            experience,
        } = patch;

        let draft = &mut self.draft;
        for (slot, value) in [
            (&mut draft.name, name),
            (&mut draft.email, email),
            (&mut draft.phone, phone),
            (&mut draft.location, location),
            (&mut draft.bio, bio),
            (&mut draft.avatar, avatar),
            (&mut draft.title, title),
            (&mut draft.experience, experience),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Appends the trimmed candidate. No-op (returns false) when it is empty
    /// or already present; comparison is exact and case-sensitive.
    pub fn add_skill(&mut self, candidate: &str) -> bool {
        let skill = candidate.trim();
        if skill.is_empty() || self.draft.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.draft.skills.push(skill.to_string());
        true
    }

    /// Removes every skill equal to `skill`. Returns whether anything changed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.draft.skills.len();
        self.draft.skills.retain(|s| s != skill);
        self.draft.skills.len() != before
    }

    /// Validates the draft. On success returns the profile to commit and
    /// clears errors; on failure records and returns the errors.
    pub fn save(&mut self) -> Result<UserProfile, FieldErrors> {
        let errors = validate_profile(&self.draft);
        if errors.is_empty() {
            self.errors = FieldErrors::default();
            Ok(self.draft.clone())
        } else {
            self.errors = errors.clone();
            Err(errors)
        }
    }
}

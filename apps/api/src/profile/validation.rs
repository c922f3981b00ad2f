use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::profile::UserProfile;

/// Minimum bio length in characters, measured before trimming.
pub const MIN_BIO_CHARS: usize = 50;

// Permissive: something, "@", something, ".", something. Unanchored.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Profile fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
    Bio,
}

/// Field → violation message. Empty means the profile is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ProfileField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: ProfileField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Applies every field rule independently; there are no cross-field rules.
pub fn validate_profile(profile: &UserProfile) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if is_blank(&profile.name) {
        errors.insert(ProfileField::Name, "Name is required");
    }

    if is_blank(&profile.email) {
        errors.insert(ProfileField::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&profile.email) {
        errors.insert(ProfileField::Email, "Please enter a valid email address");
    }

    if is_blank(&profile.phone) {
        errors.insert(ProfileField::Phone, "Phone number is required");
    }

    if is_blank(&profile.location) {
        errors.insert(ProfileField::Location, "Location is required");
    }

    if is_blank(&profile.bio) {
        errors.insert(ProfileField::Bio, "Bio is required");
    } else if profile.bio.chars().count() < MIN_BIO_CHARS {
        errors.insert(
            ProfileField::Bio,
            "Bio should be at least 50 characters long",
        );
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::seed::initial_profile;

    fn valid() -> UserProfile {
        initial_profile()
    }

    #[test]
    fn test_seed_profile_is_valid() {
        assert!(validate_profile(&valid()).is_empty());
    }

    #[test]
    fn test_blank_name() {
        let mut p = valid();
        p.name = "   ".to_string();
        let errors = validate_profile(&p);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ProfileField::Name), Some("Name is required"));
    }

    #[test]
    fn test_email_required() {
        let mut p = valid();
        p.email = "\t".to_string();
        assert_eq!(
            validate_profile(&p).get(ProfileField::Email),
            Some("Email is required")
        );
    }

    #[test]
    fn test_email_format() {
        let mut p = valid();
        for bad in ["alex", "alex@", "alex@email", "@email.com", "a @b.c"] {
            p.email = bad.to_string();
            assert_eq!(
                validate_profile(&p).get(ProfileField::Email),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_permissive() {
        let mut p = valid();
        for good in ["a@b.c", "first.last@sub.domain.io", "x y@b.c"] {
            p.email = good.to_string();
            assert!(validate_profile(&p).get(ProfileField::Email).is_none(), "{good}");
        }
    }

    #[test]
    fn test_phone_and_location_required() {
        let mut p = valid();
        p.phone = String::new();
        p.location = " ".to_string();
        let errors = validate_profile(&p);
        assert_eq!(errors.get(ProfileField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(ProfileField::Location), Some("Location is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_bio_49_chars_fails_50_passes() {
        let mut p = valid();
        p.bio = "b".repeat(49);
        assert_eq!(
            validate_profile(&p).get(ProfileField::Bio),
            Some("Bio should be at least 50 characters long")
        );
        p.bio = "b".repeat(50);
        assert!(validate_profile(&p).is_empty());
    }

    #[test]
    fn test_bio_length_counts_surrounding_whitespace() {
        let mut p = valid();
        p.bio = format!("   {}   ", "b".repeat(44));
        assert!(validate_profile(&p).is_empty());
    }

    #[test]
    fn test_bio_blank() {
        let mut p = valid();
        p.bio = " ".repeat(60);
        assert_eq!(validate_profile(&p).get(ProfileField::Bio), Some("Bio is required"));
    }

    #[test]
    fn test_all_fields_reported_independently() {
        let errors = validate_profile(&UserProfile::default());
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                ProfileField::Name,
                ProfileField::Email,
                ProfileField::Phone,
                ProfileField::Location,
                ProfileField::Bio,
            ]
        );
    }

    #[test]
    fn test_unvalidated_fields_ignored() {
        let mut p = valid();
        p.title = String::new();
        p.experience = String::new();
        p.skills.clear();
        assert!(validate_profile(&p).is_empty());
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut p = valid();
        p.name = String::new();
        let json = serde_json::to_value(validate_profile(&p)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Name is required" }));
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
    pub title: String,
    pub experience: String,
    /// Insertion ordered, no exact duplicates.
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub experience_details: Vec<ExperienceEntry>,
}

impl UserProfile {
    /// First character of each whitespace-separated name part, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

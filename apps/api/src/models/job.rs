use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Employment category. Serialized with the labels shown to users.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobCategory {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown job category '{0}'")]
pub struct UnknownCategory(pub String);

impl JobCategory {
    pub const ALL: [JobCategory; 4] = [
        JobCategory::FullTime,
        JobCategory::PartTime,
        JobCategory::Contract,
        JobCategory::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::FullTime => "Full-time",
            JobCategory::PartTime => "Part-time",
            JobCategory::Contract => "Contract",
            JobCategory::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Coarse fit label. Authored alongside each listing's score; there is no
/// threshold function mapping one to the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchRating {
    Great,
    Good,
    Average,
    Poor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: JobCategory,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: DateTime<Utc>,
    pub featured: bool,
    pub match_percentage: u8, // 0 – 100
    pub match_rating: MatchRating,
    pub experience: String,
    pub applicants: u32,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub size: String,
    pub industry: String,
    pub website: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: JobCategory,
    pub salary: String,
    pub description: String,
    pub full_description: String,
    pub requirements: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub benefits: Vec<String>,
    pub company_info: CompanyInfo,
    pub posted_date: DateTime<Utc>,
    pub featured: bool,
}

//! Static job catalog backing the mock data provider.
//!
//! Listings and details are authored independently: a listing id is not
//! guaranteed to have a detail record, and callers must handle the miss.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::job::{CompanyInfo, JobCategory, JobDetail, JobListing, MatchRating};

/// Read-only collection of listings plus an id → detail map.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<JobListing>,
    details: HashMap<String, JobDetail>,
}

impl Catalog {
    pub fn new(listings: Vec<JobListing>, details: Vec<JobDetail>) -> Self {
        let details = details.into_iter().map(|d| (d.id.clone(), d)).collect();
        Catalog { listings, details }
    }

    /// The bundled sample data.
    pub fn mock() -> Self {
        Catalog::new(mock_listings(), vec![mock_detail()])
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn detail(&self, id: &str) -> Option<&JobDetail> {
        self.details.get(id)
    }
}

/// Related-role teaser shown beside a job detail. Authored, not matched.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SimilarJob {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

const SIMILAR_JOBS: &[SimilarJob] = &[
    SimilarJob {
        title: "Frontend Developer",
        company: "StartupXYZ",
        location: "Remote",
    },
    SimilarJob {
        title: "React Developer",
        company: "WebCorp",
        location: "New York, NY",
    },
    SimilarJob {
        title: "UI Developer",
        company: "DesignTech",
        location: "Los Angeles, CA",
    },
];

pub fn similar_jobs() -> Vec<SimilarJob> {
    SIMILAR_JOBS.to_vec()
}

/// Midnight UTC on the given day. Falls back to the epoch for impossible dates.
fn posted(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct ListingSeed<'a> {
    id: &'a str,
    title: &'a str,
    company: &'a str,
    description: &'a str,
    requirements: &'a [&'a str],
    day: u32,
    featured: bool,
    match_percentage: u8,
    match_rating: MatchRating,
    experience: &'a str,
    applicants: u32,
    logo: &'a str,
}

impl ListingSeed<'_> {
    fn build(self) -> JobListing {
        JobListing {
            id: self.id.to_string(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: "Bengaluru".to_string(),
            category: JobCategory::FullTime,
            salary: "Not Disclosed".to_string(),
            description: self.description.to_string(),
            requirements: strings(self.requirements),
            posted_date: posted(2024, 1, self.day),
            featured: self.featured,
            match_percentage: self.match_percentage,
            match_rating: self.match_rating,
            experience: self.experience.to_string(),
            applicants: self.applicants,
            logo: self.logo.to_string(),
        }
    }
}

const DESIGN_SKILLS: &[&str] = &["Figma", "User Research", "Prototyping", "Design Systems"];
const RISK_SKILLS: &[&str] = &["Analytics", "Risk Management", "SQL", "Python"];

fn mock_listings() -> Vec<JobListing> {
    vec![
        ListingSeed {
            id: "1",
            title: "UX Designer",
            company: "Meta",
            description: "We are looking for an experienced UX Designer to join our growing team. You will be responsible for creating user-centric designs.",
            requirements: DESIGN_SKILLS,
            day: 15,
            featured: true,
            match_percentage: 92,
            match_rating: MatchRating::Great,
            experience: "4+ yrs exp",
            applicants: 240,
            logo: "M",
        }
        .build(),
        ListingSeed {
            id: "2",
            title: "Risk Analytics Consultant",
            company: "Wells Fargo",
            description: "Join our risk analytics team to drive data-driven decisions and build strong relationships with Enterprise partners.",
            requirements: RISK_SKILLS,
            day: 14,
            featured: false,
            match_percentage: 78,
            match_rating: MatchRating::Great,
            experience: "4+ yrs exp",
            applicants: 100,
            logo: "WF",
        }
        .build(),
        ListingSeed {
            id: "3",
            title: "UX Designer",
            company: "Meta",
            description: "We are seeking a talented UX Designer to create intuitive and beautiful user interfaces for our products.",
            requirements: DESIGN_SKILLS,
            day: 13,
            featured: true,
            match_percentage: 85,
            match_rating: MatchRating::Great,
            experience: "2+ yrs exp",
            applicants: 180,
            logo: "M",
        }
        .build(),
        ListingSeed {
            id: "4",
            title: "Risk Analytics Consultant",
            company: "Wells Fargo",
            description: "Build scalable risk analytics solutions and work with cross-functional teams to deliver exceptional results.",
            requirements: RISK_SKILLS,
            day: 12,
            featured: false,
            match_percentage: 72,
            match_rating: MatchRating::Average,
            experience: "3+ yrs exp",
            applicants: 150,
            logo: "WF",
        }
        .build(),
    ]
}

const FULL_DESCRIPTION: &str = "We are looking for an experienced Senior Frontend Developer to join our growing team at TechCorp Solutions. In this role, you will be responsible for building user-facing features using React and modern web technologies.

As a Senior Frontend Developer, you will work closely with our design and product teams to create exceptional user experiences. You will be involved in the entire development lifecycle, from planning to deployment, and will have the opportunity to mentor junior developers and contribute to our technical roadmap.

Key Responsibilities:
• Develop and maintain high-quality frontend applications using React, TypeScript, and modern CSS
• Collaborate with designers to implement pixel-perfect, responsive user interfaces
• Work with backend developers to integrate APIs and ensure seamless data flow
• Optimize applications for maximum speed and scalability
• Participate in code reviews and maintain coding standards
• Mentor junior developers and contribute to team knowledge sharing
• Stay up-to-date with the latest frontend technologies and best practices";

fn mock_detail() -> JobDetail {
    JobDetail {
        id: "1".to_string(),
        title: "Senior Frontend Developer".to_string(),
        company: "TechCorp Solutions".to_string(),
        location: "San Francisco, CA".to_string(),
        category: JobCategory::FullTime,
        salary: "$120k - $150k".to_string(),
        description: "We are looking for an experienced Frontend Developer to join our growing team. You will be responsible for building user-facing features using React and modern web technologies.".to_string(),
        full_description: FULL_DESCRIPTION.to_string(),
        requirements: strings(&[
            "5+ years of experience with React and JavaScript",
            "Strong proficiency in TypeScript",
            "Experience with modern CSS frameworks (Tailwind CSS preferred)",
            "Knowledge of state management libraries (Redux, Zustand)",
            "Experience with testing frameworks (Jest, React Testing Library)",
            "Familiarity with build tools (Webpack, Vite)",
            "Understanding of RESTful APIs and GraphQL",
            "Experience with Git and collaborative development workflows",
            "Strong problem-solving and debugging skills",
            "Excellent communication and teamwork abilities",
        ]),
        nice_to_have: strings(&[
            "Experience with Next.js or other React frameworks",
            "Knowledge of backend technologies (Node.js, Python)",
            "Experience with cloud platforms (AWS, Azure, GCP)",
            "Familiarity with Docker and containerization",
            "Understanding of accessibility standards (WCAG)",
            "Experience with performance optimization techniques",
        ]),
        benefits: strings(&[
            "Competitive salary and equity package",
            "Health, dental, and vision insurance",
            "Flexible working hours and remote work options",
            "Professional development budget",
            "Unlimited PTO policy",
            "Modern office with free meals and snacks",
            "Team retreats and company events",
            "Latest MacBook Pro and equipment",
        ]),
        company_info: CompanyInfo {
            name: "TechCorp Solutions".to_string(),
            size: "200-500 employees".to_string(),
            industry: "Software Development".to_string(),
            website: "https://techcorp.com".to_string(),
            description: "TechCorp Solutions is a leading software development company that builds innovative solutions for businesses worldwide. We are passionate about creating technology that makes a difference and fostering a culture of innovation and collaboration.".to_string(),
        },
        posted_date: posted(2024, 1, 15),
        featured: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_has_four_listings() {
        assert_eq!(Catalog::mock().listings().len(), 4);
    }

    #[test]
    fn test_mock_tiers_are_authored() {
        let catalog = Catalog::mock();
        let tiers: Vec<_> = catalog
            .listings()
            .iter()
            .map(|j| (j.match_percentage, j.match_rating))
            .collect();
        // 78 is GREAT while 72 is AVERAGE; no GOOD row exists.
        assert_eq!(
            tiers,
            vec![
                (92, MatchRating::Great),
                (78, MatchRating::Great),
                (85, MatchRating::Great),
                (72, MatchRating::Average),
            ]
        );
    }

    #[test]
    fn test_detail_hit() {
        let catalog = Catalog::mock();
        let detail = catalog.detail("1").unwrap();
        assert_eq!(detail.company_info.name, "TechCorp Solutions");
        assert_eq!(detail.requirements.len(), 10);
    }

    #[test]
    fn test_detail_miss() {
        let catalog = Catalog::mock();
        assert!(catalog.detail("2").is_none());
        assert!(catalog.detail("").is_none());
    }

    #[test]
    fn test_similar_jobs_are_authored() {
        let similar = similar_jobs();
        assert_eq!(similar.len(), 3);
        assert_eq!(similar[1].company, "WebCorp");
    }

    #[test]
    fn test_posted_is_midnight_utc() {
        assert_eq!(posted(2024, 1, 15).to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }
}

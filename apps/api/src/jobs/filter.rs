//! Listing filter/sort — a pure function of the catalog and a `JobQuery`.
//!
//! Recomputed per request; an empty result is a normal outcome.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::job::{JobCategory, JobListing, UnknownCategory};

// ────────────────────────────────────────────────────────────────────────────
// Query model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(JobCategory),
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Recent,
    Featured,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sort key '{0}' (expected 'recent' or 'featured')")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortKey::Recent),
            "featured" => Ok(SortKey::Featured),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub search: String,
    pub location: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

// ────────────────────────────────────────────────────────────────────────────
// Filter + sort
// ────────────────────────────────────────────────────────────────────────────

/// Returns the ordered subsequence of `jobs` matching every clause of `query`.
///
/// - search: case-insensitive substring of title OR company
/// - location: case-insensitive substring, vacuous when empty
/// - category: exact, vacuous for `All`
/// - sort: `Recent` = newest first; `Featured` = featured first, then newest
pub fn filter_and_sort(jobs: &[JobListing], query: &JobQuery) -> Vec<JobListing> {
    let search = query.search.to_lowercase();
    let location = query.location.to_lowercase();

    let mut results: Vec<JobListing> = jobs
        .iter()
        .filter(|job| {
            matches_search(job, &search)
                && matches_location(job, &location)
                && matches_category(job, query.category)
        })
        .cloned()
        .collect();

    // sort_by is stable: equal keys keep catalog order
    results.sort_by(|a, b| compare(a, b, query.sort));
    results
}

fn matches_search(job: &JobListing, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle) || job.company.to_lowercase().contains(needle)
}

fn matches_location(job: &JobListing, needle: &str) -> bool {
    needle.is_empty() || job.location.to_lowercase().contains(needle)
}

fn matches_category(job: &JobListing, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => job.category == category,
    }
}

fn compare(a: &JobListing, b: &JobListing, sort: SortKey) -> Ordering {
    let newest_first = b.posted_date.cmp(&a.posted_date);
    match sort {
        SortKey::Recent => newest_first,
        SortKey::Featured => b.featured.cmp(&a.featured).then(newest_first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::catalog::Catalog;
    use crate::models::job::MatchRating;
    use chrono::{Duration, TimeZone, Utc};

    fn job(
        id: &str,
        title: &str,
        company: &str,
        location: &str,
        days_ago: i64,
        featured: bool,
    ) -> JobListing {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        JobListing {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            category: JobCategory::FullTime,
            salary: "Not Disclosed".to_string(),
            description: String::new(),
            requirements: vec![],
            posted_date: base - Duration::days(days_ago),
            featured,
            match_percentage: 50,
            match_rating: MatchRating::Average,
            experience: String::new(),
            applicants: 0,
            logo: "X".to_string(),
        }
    }

    fn fixture() -> Vec<JobListing> {
        let mut remote = job("5", "Rust Engineer", "Ferrous", "Remote", 1, false);
        remote.category = JobCategory::Remote;
        let mut contract = job("6", "Data Contractor", "Acme", "Berlin", 6, true);
        contract.category = JobCategory::Contract;
        vec![
            job("1", "Backend Engineer", "Acme", "Berlin", 5, false),
            job("2", "Frontend Engineer", "Globex", "Bengaluru", 2, true),
            job("3", "Designer", "Initech", "Berlin", 3, false),
            job("4", "Engineering Manager", "Acme", "Paris", 4, true),
            remote,
            contract,
        ]
    }

    fn ids(jobs: &[JobListing]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    fn query(search: &str) -> JobQuery {
        JobQuery {
            search: search.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_matches_title_or_company_case_insensitive() {
        let jobs = fixture();
        for needle in ["ENGINEER", "acme", "gLoBeX", "design"] {
            let results = filter_and_sort(&jobs, &query(needle));
            assert!(!results.is_empty(), "expected hits for {needle}");
            let lower = needle.to_lowercase();
            for r in &results {
                assert!(
                    r.title.to_lowercase().contains(&lower)
                        || r.company.to_lowercase().contains(&lower)
                );
            }
        }
    }

    #[test]
    fn test_search_does_not_match_location_or_description() {
        let jobs = fixture();
        assert!(filter_and_sort(&jobs, &query("berlin")).is_empty());
    }

    #[test]
    fn test_empty_query_equals_location_and_category_filtered_set() {
        let jobs = fixture();
        let q = JobQuery {
            location: "BER".to_string(),
            category: CategoryFilter::Only(JobCategory::FullTime),
            ..Default::default()
        };
        let results = filter_and_sort(&jobs, &q);
        assert_eq!(ids(&results), vec!["3", "1"]);
    }

    #[test]
    fn test_location_filter_vacuous_when_empty() {
        let jobs = fixture();
        assert_eq!(filter_and_sort(&jobs, &JobQuery::default()).len(), jobs.len());
    }

    #[test]
    fn test_category_exact() {
        let jobs = fixture();
        let q = JobQuery {
            category: CategoryFilter::Only(JobCategory::Remote),
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(&jobs, &q)), vec!["5"]);

        let q = JobQuery {
            category: CategoryFilter::Only(JobCategory::PartTime),
            ..Default::default()
        };
        assert!(filter_and_sort(&jobs, &q).is_empty());
    }

    #[test]
    fn test_recent_is_non_increasing() {
        let results = filter_and_sort(&fixture(), &JobQuery::default());
        assert_eq!(ids(&results), vec!["5", "2", "3", "4", "1", "6"]);
        for pair in results.windows(2) {
            assert!(pair[0].posted_date >= pair[1].posted_date);
        }
    }

    #[test]
    fn test_featured_first_then_recency() {
        let q = JobQuery {
            sort: SortKey::Featured,
            ..Default::default()
        };
        let results = filter_and_sort(&fixture(), &q);
        assert_eq!(ids(&results), vec!["2", "4", "6", "5", "3", "1"]);

        let first_plain = results.iter().position(|j| !j.featured).unwrap();
        assert!(results[first_plain..].iter().all(|j| !j.featured));
        for pair in results.windows(2) {
            if pair[0].featured == pair[1].featured {
                assert!(pair[0].posted_date >= pair[1].posted_date);
            }
        }
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let jobs = vec![
            job("a", "One", "Co", "X", 1, false),
            job("b", "Two", "Co", "X", 1, false),
        ];
        assert_eq!(ids(&filter_and_sort(&jobs, &JobQuery::default())), vec!["a", "b"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let results = filter_and_sort(&fixture(), &query("nothing like this"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_mock_catalog_featured_sort() {
        let catalog = Catalog::mock();
        let q = JobQuery {
            sort: SortKey::Featured,
            ..Default::default()
        };
        assert_eq!(ids(&filter_and_sort(catalog.listings(), &q)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Contract".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(JobCategory::Contract))
        );
        assert!("All".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("recent".parse::<SortKey>(), Ok(SortKey::Recent));
        assert_eq!("featured".parse::<SortKey>(), Ok(SortKey::Featured));
        assert_eq!(
            "salary".parse::<SortKey>(),
            Err(UnknownSortKey("salary".to_string()))
        );
    }
}

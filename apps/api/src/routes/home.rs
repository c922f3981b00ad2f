use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::filter::{filter_and_sort, JobQuery, SortKey};
use crate::jobs::handlers::JobCard;
use crate::state::AppState;

/// Landing page highlights are marketing copy, not derived from data.
const STATS: &[(&str, &str)] = &[
    ("Active Jobs", "2,500+"),
    ("Companies", "500+"),
    ("Locations", "50+"),
    ("Success Rate", "85%"),
];

#[derive(Debug, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub featured: Vec<JobCard>,
    pub total_jobs: usize,
    pub stats: Vec<Stat>,
}

/// GET /api/v1/home
pub async fn handle_home(State(state): State<AppState>) -> Result<Json<HomeResponse>, AppError> {
    let jobs = state.provider.list_jobs().await?;
    let query = JobQuery {
        sort: SortKey::Featured,
        ..Default::default()
    };
    let now = Utc::now();
    let featured = filter_and_sort(&jobs, &query)
        .into_iter()
        .filter(|j| j.featured)
        .map(|j| JobCard::new(j, now))
        .collect();

    Ok(Json(HomeResponse {
        featured,
        total_jobs: jobs.len(),
        stats: STATS
            .iter()
            .map(|&(label, value)| Stat { label, value })
            .collect(),
    }))
}

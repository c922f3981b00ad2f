use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::catalog::{similar_jobs, SimilarJob};
use crate::jobs::filter::{filter_and_sort, CategoryFilter, JobQuery, SortKey};
use crate::jobs::format::{results_label, time_ago};
use crate::models::job::{JobDetail, JobListing};
use crate::state::AppState;

/// Raw query string. Every parameter is optional.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl TryFrom<JobSearchParams> for JobQuery {
    type Error = AppError;

    fn try_from(params: JobSearchParams) -> Result<Self, Self::Error> {
        let category = match params.category.as_deref() {
            None | Some("") => CategoryFilter::All,
            Some(raw) => raw
                .parse::<CategoryFilter>()
                .map_err(|e| AppError::Validation(e.to_string()))?,
        };
        let sort = match params.sort.as_deref() {
            None | Some("") => SortKey::default(),
            Some(raw) => raw
                .parse::<SortKey>()
                .map_err(|e| AppError::Validation(e.to_string()))?,
        };
        Ok(JobQuery {
            search: params.search.unwrap_or_default(),
            location: params.location.unwrap_or_default(),
            category,
            sort,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct JobCard {
    #[serde(flatten)]
    pub job: JobListing,
    pub posted_ago: String,
}

impl JobCard {
    pub fn new(job: JobListing, now: DateTime<Utc>) -> Self {
        let posted_ago = time_ago(job.posted_date, now);
        JobCard { job, posted_ago }
    }
}

#[derive(Debug, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

const NO_RESULTS: EmptyState = EmptyState {
    title: "No jobs found",
    hint: "Try adjusting your search criteria or filters to find more opportunities.",
};

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub results: Vec<JobCard>,
    pub total: usize,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    #[serde(flatten)]
    pub job: JobDetail,
    pub posted_ago: String,
    pub similar_jobs: Vec<SimilarJob>,
    pub back: &'static str,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobListResponse>, AppError> {
    let query = JobQuery::try_from(params)?;
    let jobs = state.provider.list_jobs().await?;
    let results = filter_and_sort(&jobs, &query);

    tracing::debug!(
        search = %query.search,
        location = %query.location,
        matched = results.len(),
        "Filtered job listings"
    );

    let now = Utc::now();
    let total = results.len();
    Ok(Json(JobListResponse {
        results: results.into_iter().map(|j| JobCard::new(j, now)).collect(),
        total,
        summary: results_label(total),
        empty_state: (total == 0).then_some(NO_RESULTS),
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = state
        .provider
        .get_job_by_id(&id)
        .await?
        .ok_or(AppError::JobNotFound(id))?;
    let posted_ago = time_ago(job.posted_date, Utc::now());
    Ok(Json(JobDetailResponse {
        job,
        posted_ago,
        similar_jobs: similar_jobs(),
        back: "/jobs",
    }))
}

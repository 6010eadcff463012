use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use catalog::{CourseLimit, DisplayFilters, TopCourses, filter, rank};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCoursesQuery {
    /// Deprecated. Accepted and ignored.
    number_of_courses: Option<u32>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterQuery {
    show_language: bool,
    show_honors: bool,
    show_lab: bool,
    show_activity: bool,
    limit: Option<u32>,
}

impl TryFrom<FilterQuery> for DisplayFilters {
    type Error = AppError;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        let limit = match query.limit {
            Some(limit) => CourseLimit::new(limit)?,
            None => CourseLimit::default(),
        };

        Ok(DisplayFilters {
            show_language: query.show_language,
            show_honors: query.show_honors,
            show_lab: query.show_lab,
            show_activity: query.show_activity,
            limit,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCoursesResponse {
    pub top_courses: TopCourses,
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn top_courses_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopCoursesQuery>,
) -> Json<TopCoursesResponse> {
    if let Some(number_of_courses) = query.number_of_courses {
        debug!("Ignoring deprecated numberOfCourses={number_of_courses}");
    }

    Json(TopCoursesResponse {
        top_courses: rank(&state.catalog).into(),
    })
}

pub async fn filtered_courses_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<TopCoursesResponse>, AppError> {
    let filters = DisplayFilters::try_from(query)?;
    debug!("Filtering top courses with {filters:?}");

    let ranked = rank(&state.catalog);

    Ok(Json(TopCoursesResponse {
        top_courses: filter(&ranked, &filters),
    }))
}

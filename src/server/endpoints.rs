// src/server/endpoints.rs

//! JSON endpoints behind the search box, the demo form and the footer
//! newsletter.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::api::Suggestions;
use crate::enroll::{EnrollmentForm, pick_courses, submit_enrollment, subscribe_newsletter};
use crate::error::AppError;
use crate::models::FormOutcome;
use crate::search::{INDUSTRY_SKILLS, SuggestionRanker, merge_suggestions};
use crate::server::AppState;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360" viewBox="0 0 640 360"><rect width="640" height="360" fill="#e5e7eb"/><path d="M270 220l40-50 30 36 20-24 40 38z" fill="#9ca3af"/><circle cx="290" cy="150" r="16" fill="#9ca3af"/></svg>"##;

#[derive(Debug, Default, Deserialize)]
pub(super) struct SuggestQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PickerQuery {
    #[serde(default)]
    q: String,
    /// Comma separated course ids
    #[serde(default)]
    selected: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct NewsletterForm {
    #[serde(default)]
    email: String,
}

/// Course offered by the demo form picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickedCourse {
    pub id: u64,
    pub title: String,
}

/// Suggestions for the search box.
///
/// Backend matches for courses, categories and blogs are passed through;
/// `popular` merges the backend's list with the locally ranked skills. An
/// empty query skips the backend and lists the leading skills.
pub async fn suggest(state: &AppState, query: &str) -> Suggestions {
    let listing = &state.config.listing;
    let ranked = SuggestionRanker::home_hero(listing, &state.config.search)
        .rank(INDUSTRY_SKILLS, query);

    if query.trim().is_empty() {
        return Suggestions {
            popular: ranked,
            ..Suggestions::default()
        };
    }

    match state.cms.suggestions(query.trim()).await {
        Ok(backend) => Suggestions {
            popular: merge_suggestions(&backend.popular, &ranked, listing.suggestion_limit),
            ..backend
        },
        Err(e) => {
            log::warn!("Failed to fetch search suggestions for '{query}': {e}");
            Suggestions {
                popular: ranked,
                ..Suggestions::default()
            }
        }
    }
}

/// Picker entries for `query`, leaving out the `selected` ids.
pub async fn course_picker(state: &AppState, query: &str, selected: &[u64]) -> Vec<PickedCourse> {
    let courses = state.cms.courses().await.unwrap_or_else(|e| {
        log::warn!("Failed to fetch courses for the picker: {e}");
        Vec::new()
    });
    pick_courses(&courses, selected, query)
        .into_iter()
        .map(|c| PickedCourse {
            id: c.id,
            title: c.title.clone(),
        })
        .collect()
}

fn failed(e: &AppError) -> (StatusCode, FormOutcome) {
    let status = match e {
        AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, FormOutcome::failed(e.user_message()))
}

/// Validate an enrollment against the courses the form offered and
/// forward it.
pub async fn enroll_outcome(state: &AppState, form: &EnrollmentForm) -> (StatusCode, FormOutcome) {
    let offered = match state.cms.courses().await {
        Ok(courses) => courses.len(),
        Err(e) => {
            log::warn!("Failed to fetch courses while validating an enrollment: {e}");
            0
        }
    };

    let request = match form.validate(offered) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Enrollment rejected by validation: {e}");
            return failed(&e);
        }
    };

    match submit_enrollment(&state.cms, &request).await {
        Ok(message) => (StatusCode::OK, FormOutcome::ok(message)),
        Err(e) => failed(&e),
    }
}

/// Sign up the footer newsletter address.
pub async fn subscribe_outcome(state: &AppState, email: &str) -> (StatusCode, FormOutcome) {
    match subscribe_newsletter(&state.cms, email, &state.config.site.newsletter_phone).await {
        Ok(message) => (StatusCode::OK, FormOutcome::ok(message)),
        Err(e) => failed(&e),
    }
}

fn parse_ids(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}

pub(super) async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestQuery>,
) -> Json<Suggestions> {
    Json(suggest(&state, &query.q).await)
}

pub(super) async fn picker(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PickerQuery>,
) -> Json<Vec<PickedCourse>> {
    Json(course_picker(&state, &query.q, &parse_ids(&query.selected)).await)
}

pub(super) async fn enroll(
    State(state): State<Arc<AppState>>,
    Json(form): Json<EnrollmentForm>,
) -> (StatusCode, Json<FormOutcome>) {
    let (status, outcome) = enroll_outcome(&state, &form).await;
    (status, Json(outcome))
}

pub(super) async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewsletterForm>,
) -> (StatusCode, Json<FormOutcome>) {
    let (status, outcome) = subscribe_outcome(&state, &form.email).await;
    (status, Json(outcome))
}

pub(super) async fn placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}

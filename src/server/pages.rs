// src/server/pages.rs

//! Page routes. Each one loads the header/footer chrome alongside its
//! view and renders both.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use maud::Markup;

use crate::pages::{
    BlogListParams, CoursesParams, HomeParams, PageKey, load_blog_list, load_blog_post,
    load_chrome, load_content_page, load_course_detail, load_courses, load_home,
};
use crate::render;
use crate::server::{AppState, Params};

/// Rendered page with its status code.
pub type Page = (StatusCode, Markup);

fn text(params: &Params, key: &str) -> String {
    params
        .get(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn optional(params: &Params, key: &str) -> Option<String> {
    Some(text(params, key)).filter(|v| !v.is_empty())
}

fn number<T: FromStr>(params: &Params, key: &str) -> Option<T> {
    params.get(key).and_then(|v| v.trim().parse().ok())
}

fn home_params(params: &Params) -> HomeParams {
    HomeParams {
        status: optional(params, "status"),
        slide: number(params, "slide").unwrap_or(0),
    }
}

fn courses_params(params: &Params) -> CoursesParams {
    CoursesParams {
        search: text(params, "search"),
        category: text(params, "category"),
        cats: text(params, "cats"),
        view: optional(params, "view"),
        row: number(params, "row"),
        slide: number(params, "slide").unwrap_or(0),
    }
}

fn blog_params(params: &Params) -> BlogListParams {
    BlogListParams {
        search: text(params, "search"),
        categories: text(params, "categories"),
        page: number(params, "page").unwrap_or(0),
    }
}

fn found(missing: bool) -> StatusCode {
    if missing {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn home_page(state: &AppState, params: &Params) -> Page {
    let params = home_params(params);
    let (chrome, view) = futures::join!(
        load_chrome(&state.cms),
        load_home(&state.cms, &state.config, &params),
    );
    (StatusCode::OK, render::home(&state.config, &chrome, &view))
}

async fn courses_page(state: &AppState, params: &Params) -> Page {
    let params = courses_params(params);
    let (chrome, view) = futures::join!(
        load_chrome(&state.cms),
        load_courses(&state.cms, &state.config, &params),
    );
    (StatusCode::OK, render::courses(&state.config, &chrome, &view))
}

async fn course_detail_page(state: &AppState, id: &str) -> Page {
    let Ok(id) = id.trim().parse::<u64>() else {
        log::debug!("Course id '{id}' is not a number");
        return not_found_page(state).await;
    };
    let (chrome, view) = futures::join!(
        load_chrome(&state.cms),
        load_course_detail(&state.cms, &state.config, id),
    );
    (
        found(view.course.is_none()),
        render::course_detail(&state.config, &chrome, &view),
    )
}

async fn blog_list_page(state: &AppState, params: &Params) -> Page {
    let params = blog_params(params);
    let (chrome, view) = futures::join!(
        load_chrome(&state.cms),
        load_blog_list(&state.cms, &state.config, &params),
    );
    (StatusCode::OK, render::blog_list(&state.config, &chrome, &view))
}

async fn blog_post_page(state: &AppState, slug: &str) -> Page {
    let (chrome, view) = futures::join!(
        load_chrome(&state.cms),
        load_blog_post(&state.cms, &state.config, slug),
    );
    (
        found(view.post.is_none()),
        render::blog_post(&state.config, &chrome, &view),
    )
}

async fn content(state: &AppState, key: PageKey) -> Page {
    let (chrome, view) = futures::join!(
        load_chrome(&state.cms),
        load_content_page(&state.cms, &state.config, key),
    );
    (StatusCode::OK, render::content_page(&state.config, &chrome, &view))
}

async fn not_found_page(state: &AppState) -> Page {
    let chrome = load_chrome(&state.cms).await;
    (
        StatusCode::NOT_FOUND,
        render::not_found(&state.config, &chrome),
    )
}

/// Render the page served at `path` without going through HTTP.
pub async fn render_page(state: &AppState, path: &str, params: &Params) -> Page {
    let route = path.trim_end_matches('/');
    match route {
        "" => home_page(state, params).await,
        "/courses" => courses_page(state, params).await,
        "/blog" => blog_list_page(state, params).await,
        "/about-us" => content(state, PageKey::About).await,
        "/corporate-training" => content(state, PageKey::CorporateTraining).await,
        "/on-job-support" => content(state, PageKey::OnJobSupport).await,
        "/contact-us" => content(state, PageKey::Contact).await,
        "/terms" => content(state, PageKey::Terms).await,
        _ => {
            if let Some(id) = route.strip_prefix("/course-details/") {
                course_detail_page(state, id).await
            } else if let Some(slug) = route.strip_prefix("/blog/").filter(|s| !s.contains('/')) {
                blog_post_page(state, slug).await
            } else {
                not_found_page(state).await
            }
        }
    }
}

pub(super) async fn home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Params>,
) -> Page {
    home_page(&state, &params).await
}

pub(super) async fn courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Params>,
) -> Page {
    courses_page(&state, &params).await
}

pub(super) async fn course_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Page {
    course_detail_page(&state, &id).await
}

pub(super) async fn blog_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Params>,
) -> Page {
    blog_list_page(&state, &params).await
}

pub(super) async fn blog_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Page {
    blog_post_page(&state, &slug).await
}

pub(super) async fn about(State(state): State<Arc<AppState>>) -> Page {
    content(&state, PageKey::About).await
}

pub(super) async fn corporate_training(State(state): State<Arc<AppState>>) -> Page {
    content(&state, PageKey::CorporateTraining).await
}

pub(super) async fn on_job_support(State(state): State<Arc<AppState>>) -> Page {
    content(&state, PageKey::OnJobSupport).await
}

pub(super) async fn contact(State(state): State<Arc<AppState>>) -> Page {
    content(&state, PageKey::Contact).await
}

pub(super) async fn terms(State(state): State<Arc<AppState>>) -> Page {
    content(&state, PageKey::Terms).await
}

pub(super) async fn fallback(State(state): State<Arc<AppState>>) -> Page {
    not_found_page(&state).await
}

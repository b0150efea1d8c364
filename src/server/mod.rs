// src/server/mod.rs

//! HTTP server: rendered pages plus the JSON endpoints used by the inline
//! scripts.

mod endpoints;
mod pages;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::api::{Cms, HttpSource};
use crate::error::Result;
use crate::models::Config;

pub use endpoints::{PickedCourse, course_picker, enroll_outcome, subscribe_outcome, suggest};
pub use pages::{Page, render_page};

/// Query string parameters as sent by the browser.
pub type Params = HashMap<String, String>;

/// Immutable state shared by every request.
pub struct AppState {
    pub config: Config,
    pub cms: Cms,
}

impl AppState {
    pub fn new(config: Config, cms: Cms) -> Self {
        Self { config, cms }
    }

    /// State talking to the configured backend over HTTP.
    pub fn from_config(config: Config) -> Result<Self> {
        let source = HttpSource::new(&config.api)?;
        log::debug!("Backend base URL: {}", source.base_url());
        Ok(Self::new(config, Cms::new(Arc::new(source))))
    }
}

/// All site routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/courses", get(pages::courses))
        .route("/course-details/{id}", get(pages::course_detail))
        .route("/blog", get(pages::blog_list))
        .route("/blog/{slug}", get(pages::blog_post))
        .route("/about-us", get(pages::about))
        .route("/corporate-training", get(pages::corporate_training))
        .route("/on-job-support", get(pages::on_job_support))
        .route("/contact-us", get(pages::contact))
        .route("/terms", get(pages::terms))
        .route("/api/suggestions", get(endpoints::suggestions))
        .route("/api/course-picker", get(endpoints::picker))
        .route("/enroll", post(endpoints::enroll))
        .route("/subscribe", post(endpoints::subscribe))
        .route("/placeholder.svg", get(endpoints::placeholder))
        .fallback(pages::fallback)
        .with_state(state)
}

/// Bind `server.bind` and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let bind = config.server.bind.clone();
    let state = Arc::new(AppState::from_config(config)?);
    let listener = TcpListener::bind(&bind).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

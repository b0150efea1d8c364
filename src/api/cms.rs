//! Typed CMS endpoints.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::api::{ContentSource, envelope};
use crate::catalog::BlogQuery;
use crate::error::{AppError, Result};
use crate::models::{
    BlogPost, Category, Course, EnrollmentRequest, FooterSettings, FormDetails, HeaderSettings,
    ListItem, PageContent, SeoRecord, SubmissionResponse, lenient,
};

/// Singleton content endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEndpoint {
    Homepage,
    CoursePage,
    BlogPage,
    About,
    CorporateTraining,
    OnJobSupport,
    Contact,
    Terms,
    JobAssistance,
    HrFaqs,
    Faqs,
    PlacementsReserve,
}

impl PageEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Homepage => "/homepage",
            Self::CoursePage => "/course-page-content",
            Self::BlogPage => "/blog-page",
            Self::About => "/about-page",
            Self::CorporateTraining => "/corporate-training",
            Self::OnJobSupport => "/on-job-support-page",
            Self::Contact => "/contact-page",
            Self::Terms => "/terms",
            Self::JobAssistance => "/job-assistance",
            Self::HrFaqs => "/hr-faqs",
            Self::Faqs => "/faqs",
            Self::PlacementsReserve => "/placements-reserve",
        }
    }
}

impl fmt::Display for PageEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Reply of `/search/suggestions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default, deserialize_with = "lenient::list")]
    pub popular: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub categories: Vec<Value>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub courses: Vec<Value>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub blogs: Vec<Value>,
}

/// Typed access to the backend.
#[derive(Clone)]
pub struct Cms {
    source: Arc<dyn ContentSource>,
}

impl fmt::Debug for Cms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cms").finish_non_exhaustive()
    }
}

impl Cms {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.source.get_json(path, &[]).await
    }

    /// `GET /courses`
    pub async fn courses(&self) -> Result<Vec<Course>> {
        Ok(envelope::typed_list(self.get("/courses").await?))
    }

    /// `GET /courses/{id}`
    ///
    /// Accepts `{course: {..}, details: {..}}` as well, moving the sibling
    /// `details` into the course.
    pub async fn course(&self, id: u64) -> Result<Course> {
        let path = format!("/courses/{id}");
        let mut value = envelope::record(self.get(&path).await?);

        if let Some(Value::Object(map)) = value.as_object_mut().and_then(|m| m.remove("course")) {
            let details = value.get_mut("details").map(Value::take);
            let mut course = Value::Object(map);
            if let Some(details) = details.filter(|d| d.is_object()) {
                if course.get("details").is_none_or(Value::is_null) {
                    course["details"] = details;
                }
            }
            value = course;
        }

        if !value.is_object() {
            return Err(AppError::not_found(format!("course {id}")));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Vec<Category>> {
        Ok(envelope::typed_list(self.get("/categories").await?))
    }

    /// `GET /blog-categories`
    pub async fn blog_categories(&self) -> Result<Vec<Category>> {
        Ok(envelope::typed_list(self.get("/blog-categories").await?))
    }

    /// `GET /blogs` with category and search filters.
    pub async fn blogs(&self, query: &BlogQuery) -> Result<Vec<BlogPost>> {
        let value = self.source.get_json("/blogs", &query.to_query()).await?;
        Ok(envelope::typed_list(value))
    }

    /// Recent posts: `/blogs?recent=yes`, then plain `/blogs` when that fails
    /// or comes back empty.
    pub async fn recent_blogs(&self, limit: usize) -> Result<Vec<BlogPost>> {
        let recent = self
            .source
            .get_json("/blogs", &[("recent".to_string(), "yes".to_string())])
            .await
            .map(envelope::typed_list::<BlogPost>);

        let mut posts = match recent {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => {
                log::debug!("No recent blogs flagged, using full list");
                self.blogs(&BlogQuery::default()).await?
            }
            Err(e) => {
                log::warn!("Recent blogs request failed, using full list: {e}");
                self.blogs(&BlogQuery::default()).await?
            }
        };
        posts.truncate(limit);
        Ok(posts)
    }

    /// `GET /blogs/{slug}`, with the slug sent as one escaped segment.
    pub async fn blog(&self, slug: &str) -> Result<BlogPost> {
        let segment =
            path_segment(slug).ok_or_else(|| AppError::not_found(format!("blog {slug}")))?;
        let path = format!("/blogs/{segment}");
        let value = envelope::record(self.get(&path).await?);
        if !value.is_object() {
            return Err(AppError::not_found(format!("blog {slug}")));
        }
        Ok(BlogPost::from_value(&value))
    }

    /// Page content of a singleton endpoint.
    pub async fn page(&self, endpoint: PageEndpoint) -> Result<PageContent> {
        let value = envelope::record(self.get(endpoint.path()).await?);
        Ok(PageContent::new(value))
    }

    /// FAQ entries of `/faqs` or `/hr-faqs`, minus those flagged hidden.
    pub async fn faqs(&self, endpoint: PageEndpoint) -> Result<Vec<ListItem>> {
        let entries = envelope::list(self.get(endpoint.path()).await?);
        Ok(entries
            .iter()
            .filter(|entry| is_shown(entry.get("show")))
            .filter_map(ListItem::from_value)
            .collect())
    }

    /// `GET /seo/{id}`
    pub async fn seo(&self, id: u32) -> Result<SeoRecord> {
        let value = envelope::record(self.get(&format!("/seo/{id}")).await?);
        if value.is_null() {
            return Ok(SeoRecord::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /form-details`
    pub async fn form_details(&self) -> Result<FormDetails> {
        let value = envelope::record(self.get("/form-details").await?);
        if value.is_null() {
            return Ok(FormDetails::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /header-settings`
    pub async fn header_settings(&self) -> Result<HeaderSettings> {
        let value = envelope::record(self.get("/header-settings").await?);
        if value.is_null() {
            return Ok(HeaderSettings::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /footer-settings`
    pub async fn footer_settings(&self) -> Result<FooterSettings> {
        let value = envelope::record(self.get("/footer-settings").await?);
        if value.is_null() {
            return Ok(FooterSettings::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /search/suggestions?q=`
    pub async fn suggestions(&self, query: &str) -> Result<Suggestions> {
        let value = self
            .source
            .get_json(
                "/search/suggestions",
                &[("q".to_string(), query.to_string())],
            )
            .await?;
        let value = envelope::payload(value);
        if value.is_null() {
            return Ok(Suggestions::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `POST /enroll`. The reply is read without unwrapping its envelope,
    /// since `success` and `message` live at the top level.
    pub async fn enroll(&self, request: &EnrollmentRequest) -> Result<SubmissionResponse> {
        let body = serde_json::to_value(request)?;
        let reply = self.source.post_json("/enroll", &body).await?;
        if reply.is_object() {
            Ok(serde_json::from_value(reply)?)
        } else {
            Ok(SubmissionResponse::default())
        }
    }
}

/// Visibility flag of a list entry; absent means shown.
fn is_shown(flag: Option<&Value>) -> bool {
    match flag {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(other) => lenient::scalar_text(other).is_some_and(|s| {
            matches!(s.trim().to_lowercase().as_str(), "y" | "yes" | "1" | "true")
        }),
    }
}

/// Percent-encode `raw` so it stays a single path segment. Dot segments
/// name no record and are refused.
fn path_segment(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "." || raw == ".." {
        return None;
    }
    let encoded: String = form_urlencoded::byte_serialize(raw.as_bytes()).collect();
    Some(encoded.replace('+', "%20"))
}

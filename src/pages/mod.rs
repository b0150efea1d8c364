// src/pages/mod.rs

//! Page loaders.
//!
//! Each route has one async loader that fetches everything the page needs
//! concurrently. A failed fetch never fails the page: it is logged and the
//! documented fallback takes its place.

mod loaders;
pub mod meta;

use std::future::Future;

use crate::api::{Cms, PageEndpoint};
use crate::error::Result;
use crate::models::{FooterSettings, HeaderSettings, PageMeta, SeoConfig};

pub use loaders::{
    BlogListParams, BlogListView, BlogPostView, ContentView, CourseDetailView, CoursesParams,
    CoursesView, DemoForm, HomeParams, HomeView, RowPage, load_blog_list, load_blog_post,
    load_content_page, load_course_detail, load_courses, load_home,
};

/// CMS-managed pages with their own SEO record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    Courses,
    CorporateTraining,
    OnJobSupport,
    About,
    Blog,
    Contact,
    Terms,
}

impl PageKey {
    /// Id of the page's SEO record.
    pub fn seo_id(self, seo: &SeoConfig) -> u32 {
        match self {
            Self::Home => seo.home,
            Self::Courses => seo.courses,
            Self::CorporateTraining => seo.corporate_training,
            Self::OnJobSupport => seo.on_job_support,
            Self::About => seo.about,
            Self::Blog => seo.blog,
            Self::Contact => seo.contact,
            Self::Terms => seo.terms,
        }
    }

    /// Site route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Courses => "/courses",
            Self::CorporateTraining => "/corporate-training",
            Self::OnJobSupport => "/on-job-support",
            Self::About => "/about-us",
            Self::Blog => "/blog",
            Self::Contact => "/contact-us",
            Self::Terms => "/terms",
        }
    }

    /// Human name, as used in headings and failure notices.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Courses => "Courses",
            Self::CorporateTraining => "Corporate Training",
            Self::OnJobSupport => "On-Job Support",
            Self::About => "About Us",
            Self::Blog => "Blog",
            Self::Contact => "Contact Us",
            Self::Terms => "Terms & Conditions",
        }
    }

    /// Content endpoint of the page.
    pub fn endpoint(self) -> PageEndpoint {
        match self {
            Self::Home => PageEndpoint::Homepage,
            Self::Courses => PageEndpoint::CoursePage,
            Self::CorporateTraining => PageEndpoint::CorporateTraining,
            Self::OnJobSupport => PageEndpoint::OnJobSupport,
            Self::About => PageEndpoint::About,
            Self::Blog => PageEndpoint::BlogPage,
            Self::Contact => PageEndpoint::Contact,
            Self::Terms => PageEndpoint::Terms,
        }
    }

    /// `page` value sent with enrollments from this page.
    pub fn form_source(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Courses => "courses",
            Self::CorporateTraining => "corporate-training",
            Self::OnJobSupport => "on-job-support",
            Self::About => "about-us",
            Self::Blog => "blog",
            Self::Contact => "contact-us",
            Self::Terms => "terms",
        }
    }

    /// Metadata used when the SEO record is missing or blank.
    pub fn fallback_meta(self, site_name: &str) -> PageMeta {
        let (title, description, keywords): (String, &str, &[&str]) = match self {
            Self::Home => (
                site_name.to_string(),
                "Expert-led online courses, corporate training and on-job support.",
                &["online courses", "training", "certification"],
            ),
            Self::Courses => (
                format!("Courses | {site_name}"),
                "Browse courses by category, skill level and topic.",
                &["courses", "online training"],
            ),
            Self::CorporateTraining => (
                format!("Corporate Training | {site_name}"),
                "Custom training programs that upskill whole teams.",
                &["corporate training", "team upskilling"],
            ),
            Self::OnJobSupport => (
                format!("On-Job Support | {site_name}"),
                "Real-time help from experts on live projects.",
                &["job support", "project support"],
            ),
            Self::About => (
                format!("About Us | {site_name}"),
                "Who we are and how we train.",
                &["about"],
            ),
            Self::Blog => (
                format!("Blog | {site_name}"),
                "Articles, guides and career advice.",
                &["blog", "tutorials"],
            ),
            Self::Contact => (
                format!("Contact Us | {site_name}"),
                "Talk to our team about courses and training.",
                &["contact"],
            ),
            Self::Terms => (
                format!("Terms & Conditions | {site_name}"),
                "Terms of use for our courses and website.",
                &["terms"],
            ),
        };
        PageMeta::fallback(&title, description, keywords)
    }
}

/// Header and footer settings shared by every page.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub header: HeaderSettings,
    pub footer: FooterSettings,
}

/// Load header and footer settings, defaulting each on failure.
pub async fn load_chrome(cms: &Cms) -> Chrome {
    let (header, footer) = futures::join!(
        or_fallback("header settings", cms.header_settings(), HeaderSettings::default()),
        or_fallback("footer settings", cms.footer_settings(), FooterSettings::default()),
    );
    Chrome { header, footer }
}

/// Await `fut`, substituting `fallback` and logging a warning on error.
pub async fn or_fallback<T>(what: &str, fut: impl Future<Output = Result<T>>, fallback: T) -> T {
    match fut.await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to load {what}, using fallback: {e}");
            fallback
        }
    }
}

/// Like [`or_fallback`], but keeps the failure visible as `None`.
pub async fn or_none<T>(what: &str, fut: impl Future<Output = Result<T>>) -> Option<T> {
    match fut.await {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Failed to load {what}: {e}");
            None
        }
    }
}

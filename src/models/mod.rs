// src/models/mod.rs

//! Domain models for the catalog site.
//!
//! Typed, lenient views of the CMS payloads plus the site configuration.

mod blog;
mod chrome;
mod config;
mod content;
mod course;
mod form;
pub mod lenient;
mod seo;

// Re-export all public types
pub use blog::{BlogPost, PLACEHOLDER_IMAGE, normalize_image, parse_timestamp};
pub use chrome::{ContactDetails, FooterSettings, HeaderSettings, MenuLink, default_menu};
pub use config::{
    ApiConfig, Config, ListingConfig, SearchConfig, SeoConfig, ServerConfig, SiteConfig,
};
pub use content::{ListItem, PageContent, TitleParts};
pub use course::{Category, Course, CourseDetails};
pub use form::{EnrollmentRequest, FormDetails, FormOutcome, SubmissionResponse};
pub use seo::{PageMeta, SeoRecord};

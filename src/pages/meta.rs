//! `<head>` metadata for each page.

use scraper::Html;
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

use crate::models::{BlogPost, Config, Course, PLACEHOLDER_IMAGE, PageMeta, SeoRecord};
use crate::pages::PageKey;

/// Longest generated meta description, in graphemes.
pub const DESCRIPTION_LIMIT: usize = 155;

/// Visible text of an HTML fragment, whitespace collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: Vec<&str> = fragment
        .root_element()
        .text()
        .flat_map(str::split_whitespace)
        .collect();
    text.join(" ")
}

/// First `limit` graphemes of `text`.
pub fn truncate_graphemes(text: &str, limit: usize) -> String {
    text.graphemes(true).take(limit).collect()
}

/// Scheme, host and port of the backend, without the API path.
pub fn backend_origin(base_url: &str) -> Option<String> {
    let url = Url::parse(base_url).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Absolute URL of an asset path served by the backend.
///
/// Absolute URLs and the built-in placeholder are returned unchanged.
pub fn asset_url(config: &Config, path: &str) -> String {
    let clean: String = path.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.starts_with("http") || clean == PLACEHOLDER_IMAGE || clean.is_empty() {
        return if clean.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            clean
        };
    }
    match backend_origin(&config.api.base_url) {
        Some(origin) => format!("{origin}/{}", clean.trim_start_matches('/')),
        None => clean,
    }
}

/// Absolute URL of a site page.
pub fn canonical_url(config: &Config, path: &str) -> String {
    format!(
        "{}/{}",
        config.server.site_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Metadata of a CMS-managed page: its SEO record over the built-in
/// fallback.
pub fn page_meta(key: PageKey, record: &SeoRecord, config: &Config) -> PageMeta {
    key.fallback_meta(&config.site.name)
        .with_record(record)
        .with_canonical(canonical_url(config, key.path()))
}

/// Metadata of a course detail page.
pub fn course_meta(course: &Course, config: &Config) -> PageMeta {
    let details = course.details_or_default();
    let title = details
        .meta_title
        .clone()
        .unwrap_or_else(|| course.display_title());
    let description = details
        .meta_description
        .clone()
        .unwrap_or_else(|| truncate_graphemes(&plain_text(&course.description), DESCRIPTION_LIMIT));

    let mut meta = PageMeta::fallback(&title, &description, &[])
        .with_canonical(canonical_url(config, &format!("/course-details/{}", course.id)));
    meta.keywords = details.meta_keywords;
    if !course.image.trim().is_empty() {
        meta = meta.with_image(asset_url(config, &course.image));
    }
    meta
}

/// Metadata of a blog post.
pub fn blog_meta(post: &BlogPost, config: &Config) -> PageMeta {
    let title = post
        .meta_title
        .clone()
        .unwrap_or_else(|| post.title.clone());
    let description = post
        .meta_description
        .clone()
        .unwrap_or_else(|| truncate_graphemes(&plain_text(&post.content), DESCRIPTION_LIMIT));

    let mut meta = PageMeta::fallback(&title, &description, &[])
        .with_canonical(canonical_url(config, &post.path()))
        .with_image(asset_url(config, &post.thumbnail_image))
        .article();
    meta.keywords = post.meta_keywords.clone();
    meta
}

/// Metadata for a missing page.
pub fn not_found_meta(what: &str, config: &Config) -> PageMeta {
    PageMeta::fallback(
        &format!("{what} Not Found | {}", config.site.name),
        &format!("The requested {} could not be found.", what.to_lowercase()),
        &[],
    )
}

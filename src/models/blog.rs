// src/models/blog.rs

//! Blog post data structure.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::lenient::{first_text, keyword_list, scalar_text, value_id};

/// Image shown when a post carries none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A blog post, reconciled from the backend's historical field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlogPost {
    /// `blog_id` or `id`
    pub id: u64,

    /// `blog_name` or `title`
    pub title: String,

    /// `url_friendly_title` or `slug`
    pub slug: String,

    /// Listing image (banner first)
    pub banner_image: String,

    /// Detail image (thumbnail first)
    pub thumbnail_image: String,

    /// `short_description` or `excerpt.short`
    pub description: String,

    /// Publication time, when parseable
    pub published_at: Option<DateTime<Utc>>,

    /// Body HTML
    pub content: String,

    pub category_id: Option<u64>,

    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Vec<String>,
}

impl BlogPost {
    /// Build a post from a raw backend record.
    pub fn from_value(value: &Value) -> Self {
        let id = ["blog_id", "id"]
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(value_id)
            .unwrap_or_default();

        let description = first_text(value, &["short_description"])
            .or_else(|| value.get("excerpt").and_then(|e| first_text(e, &["short"])))
            .unwrap_or_default();

        let published_at = value
            .get("published_at")
            .and_then(scalar_text)
            .and_then(|s| parse_timestamp(&s));

        Self {
            id,
            title: first_text(value, &["blog_name", "title"]).unwrap_or_default(),
            slug: first_text(value, &["url_friendly_title", "slug"]).unwrap_or_default(),
            banner_image: pick_image(value, &["banner_image", "thumbnail_image", "images"]),
            thumbnail_image: pick_image(value, &["thumbnail_image", "banner_image", "images"]),
            description,
            published_at,
            content: first_text(value, &["blog_content", "content"]).unwrap_or_default(),
            category_id: value.get("category_id").and_then(value_id),
            meta_title: first_text(value, &["meta_title"]),
            meta_description: first_text(value, &["meta_description"]),
            meta_keywords: value
                .get("meta_keywords")
                .map(keyword_list)
                .unwrap_or_default(),
        }
    }

    /// Link target: the slug, or the id when the slug is missing.
    pub fn path(&self) -> String {
        if self.slug.is_empty() {
            format!("/blog/{}", self.id)
        } else {
            format!("/blog/{}", self.slug)
        }
    }

    /// Publication date formatted like `Mon Jan 06 2025`.
    pub fn display_date(&self) -> String {
        self.published_at
            .map(|d| d.format("%a %b %d %Y").to_string())
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for BlogPost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// First usable image among `keys`, normalized.
fn pick_image(value: &Value, keys: &[&str]) -> String {
    let raw = keys
        .iter()
        .filter_map(|key| value.get(key))
        .find_map(|v| match v {
            Value::Object(_) | Value::Array(_) => image_from_json(v),
            other => scalar_text(other),
        })
        .unwrap_or_default();
    normalize_image(&raw)
}

/// Normalize an image reference.
///
/// JSON-encoded image sets (`{"thumbnail": .., "banner": ..}`) are unpacked,
/// whitespace is removed, and bare file names become root-relative.
pub fn normalize_image(raw: &str) -> String {
    let trimmed = raw.trim();
    let unpacked = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        serde_json::from_str::<Value>(trimmed)
            .ok()
            .and_then(|v| image_from_json(&v))
            .unwrap_or_default()
    } else {
        trimmed.to_string()
    };

    let clean: String = unpacked.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if clean.starts_with('/') || clean.starts_with("http") {
        clean
    } else {
        format!("/{clean}")
    }
}

fn image_from_json(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => first_text(value, &["thumbnail", "banner"])
            .or_else(|| map.values().find_map(scalar_text)),
        Value::Array(items) => items.iter().find_map(|item| match item {
            Value::Object(_) => image_from_json(item),
            other => scalar_text(other),
        }),
        other => scalar_text(other),
    }
}

/// Parse the timestamp formats the backend emits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_legacy_field_names() {
        let post: BlogPost = serde_json::from_value(json!({
            "blog_id": 5,
            "blog_name": "Learning Rust",
            "url_friendly_title": "learning-rust",
            "banner_image": "uploads/banner.png",
            "thumbnail_image": "uploads/thumb.png",
            "short_description": "Why Rust",
            "published_at": "2025-01-06T10:00:00Z",
            "category_id": "2",
            "meta_keywords": "rust, systems"
        }))
        .unwrap();

        assert_eq!(post.id, 5);
        assert_eq!(post.title, "Learning Rust");
        assert_eq!(post.path(), "/blog/learning-rust");
        assert_eq!(post.banner_image, "/uploads/banner.png");
        assert_eq!(post.thumbnail_image, "/uploads/thumb.png");
        assert_eq!(post.description, "Why Rust");
        assert_eq!(post.display_date(), "Mon Jan 06 2025");
        assert_eq!(post.category_id, Some(2));
        assert_eq!(post.meta_keywords, vec!["rust", "systems"]);
    }

    #[test]
    fn test_current_field_names() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": 9,
            "title": "Cloud Basics",
            "slug": "cloud-basics",
            "excerpt": {"short": "Intro"},
            "published_at": "2024-12-01 08:30:00"
        }))
        .unwrap();

        assert_eq!(post.id, 9);
        assert_eq!(post.slug, "cloud-basics");
        assert_eq!(post.description, "Intro");
        assert_eq!(post.banner_image, PLACEHOLDER_IMAGE);
        assert!(post.published_at.is_some());
    }

    #[test]
    fn test_encoded_image_set() {
        assert_eq!(
            normalize_image(r#"{"thumbnail": "img/t.png", "banner": "img/b.png"}"#),
            "/img/t.png"
        );
        assert_eq!(normalize_image("[\"a.png\"]"), "/a.png");
        assert_eq!(
            normalize_image(" https://cdn.example.com/x y.png\n"),
            "https://cdn.example.com/xy.png"
        );
        assert_eq!(normalize_image(""), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_missing_slug_uses_id() {
        let post = BlogPost::from_value(&json!({"id": 3, "title": "x"}));
        assert_eq!(post.path(), "/blog/3");
        assert_eq!(post.display_date(), "");
    }
}

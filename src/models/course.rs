// src/models/course.rs

//! Course and category data structures.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::content::{self, ListItem};
use crate::models::lenient;

/// A course as listed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier
    #[serde(default, alias = "ID", deserialize_with = "lenient::id")]
    pub id: u64,

    /// Display title
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,

    /// Card image path or URL
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: String,

    /// Average rating
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub rating: Option<f64>,

    /// Enrolled students, as displayed (e.g. "1.2k")
    #[serde(default, deserialize_with = "lenient::string")]
    pub students: String,

    /// Owning category
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub category_id: Option<u64>,

    /// Short description
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,

    /// Listing tab (e.g. "trending", "popular", "free")
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,

    /// Detail sections, present on `/courses/{id}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CourseDetails>,
}

impl Course {
    /// Whether the course's status equals `status`, ignoring case.
    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status.trim())
    }

    /// Case-insensitive substring match over title, description and status.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.status.to_lowercase().contains(needle)
    }

    /// Title shown in forms, with a stable placeholder for untitled courses.
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Course {}", self.id)
        } else {
            self.title.clone()
        }
    }

    /// Details, or the empty default when the backend sent none.
    pub fn details_or_default(&self) -> CourseDetails {
        self.details.clone().unwrap_or_default()
    }
}

/// Detail sections of a single course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    #[serde(default, deserialize_with = "content::items")]
    pub agenda: Vec<ListItem>,

    #[serde(default, deserialize_with = "content::items")]
    pub why_choose: Vec<ListItem>,

    #[serde(default, deserialize_with = "content::items")]
    pub who_should_join: Vec<ListItem>,

    #[serde(default, deserialize_with = "content::items")]
    pub key_outcomes: Vec<ListItem>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub meta_title: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub meta_description: Option<String>,

    #[serde(default, deserialize_with = "lenient::keywords")]
    pub meta_keywords: Vec<String>,
}

/// A course or blog category.
///
/// Blog categories use `category_id` / `category_name`; those win over
/// `id` / `name` when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let id = ["category_id", "id"]
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(lenient::value_id)
            .unwrap_or_default();
        let name = lenient::first_text(&value, &["category_name", "name"]).unwrap_or_default();
        Ok(Self { id, name })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_course_lenient_fields() {
        let course: Course = serde_json::from_value(json!({
            "id": "12",
            "title": "Rust Fundamentals",
            "rating": "4.5",
            "students": 1200,
            "category_id": 3,
            "description": null,
            "status": "Trending"
        }))
        .unwrap();

        assert_eq!(course.id, 12);
        assert_eq!(course.rating, Some(4.5));
        assert_eq!(course.students, "1200");
        assert_eq!(course.category_id, Some(3));
        assert_eq!(course.description, "");
        assert!(course.has_status("trending"));
        assert!(course.details.is_none());
    }

    #[test]
    fn test_course_matches_status_and_description() {
        let course = Course {
            title: "Kubernetes".into(),
            description: "Container orchestration".into(),
            status: "popular".into(),
            ..Course::default()
        };
        assert!(course.matches("orchestr"));
        assert!(course.matches("popular"));
        assert!(!course.matches("python"));
    }

    #[test]
    fn test_course_details_default_lists() {
        let course: Course = serde_json::from_value(json!({
            "id": 1,
            "details": {"agenda": null, "meta_keywords": "a, b"}
        }))
        .unwrap();
        let details = course.details_or_default();
        assert!(details.agenda.is_empty());
        assert_eq!(details.meta_keywords, vec!["a", "b"]);
    }

    #[test]
    fn test_display_title_placeholder() {
        let course = Course {
            id: 9,
            ..Course::default()
        };
        assert_eq!(course.display_title(), "Course 9");
    }

    #[test]
    fn test_category_prefers_blog_keys() {
        let cat: Category = serde_json::from_value(json!({
            "id": 1, "category_id": 4, "name": "x", "category_name": "Cloud"
        }))
        .unwrap();
        assert_eq!(cat, Category::new(4, "Cloud"));
    }

    #[test]
    fn test_category_aliases() {
        let cat: Category =
            serde_json::from_value(json!({"category_id": 4, "category_name": "Cloud"})).unwrap();
        assert_eq!(cat, Category::new(4, "Cloud"));
    }
}

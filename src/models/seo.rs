//! SEO metadata records and resolved page metadata.

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A row of the backend's SEO table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoRecord {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub meta_title: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub meta_description: Option<String>,

    #[serde(default, deserialize_with = "lenient::keywords")]
    pub meta_keywords: Vec<String>,
}

/// Metadata emitted into a page's `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Absolute canonical URL
    pub canonical: Option<String>,
    /// Absolute Open Graph image
    pub image: Option<String>,
    /// Open Graph type (`website` or `article`)
    pub og_type: &'static str,
}

impl PageMeta {
    /// Metadata built only from fallback values.
    pub fn fallback(title: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            canonical: None,
            image: None,
            og_type: "website",
        }
    }

    /// Overlay a SEO record onto fallback metadata; blank record fields keep
    /// the fallback.
    pub fn with_record(mut self, record: &SeoRecord) -> Self {
        if let Some(title) = record.meta_title.as_deref().filter(|t| !t.trim().is_empty()) {
            self.title = title.to_string();
        }
        if let Some(desc) = record
            .meta_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
        {
            self.description = desc.to_string();
        }
        if !record.meta_keywords.is_empty() {
            self.keywords = record.meta_keywords.clone();
        }
        self
    }

    pub fn with_canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn article(mut self) -> Self {
        self.og_type = "article";
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_overlays_fallback() {
        let record: SeoRecord = serde_json::from_value(json!({
            "meta_title": "Courses | Example",
            "meta_description": "",
            "meta_keywords": ["rust", "go"]
        }))
        .unwrap();

        let meta = PageMeta::fallback("Courses", "Fallback description", &["courses"])
            .with_record(&record);

        assert_eq!(meta.title, "Courses | Example");
        assert_eq!(meta.description, "Fallback description");
        assert_eq!(meta.keywords, vec!["rust", "go"]);
        assert_eq!(meta.og_type, "website");
    }

    #[test]
    fn test_keywords_from_string() {
        let record: SeoRecord =
            serde_json::from_value(json!({"meta_keywords": "a, b ,c"})).unwrap();
        assert_eq!(record.meta_keywords, vec!["a", "b", "c"]);
    }
}

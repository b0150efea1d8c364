//! Loosely-typed CMS page content.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::lenient::{first_text, scalar_text};

/// Per-route bag of CMS fields.
///
/// Shapes differ per page and every field may be absent, so the payload is
/// kept as JSON and read through typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageContent(Value);

impl PageContent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Whether the payload carries any fields at all.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Raw field value.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Text of a scalar field.
    pub fn text(&self, key: &str) -> Option<String> {
        self.field(key).and_then(scalar_text)
    }

    /// Text of the first present field among `keys`.
    pub fn text_of(&self, keys: &[&str]) -> Option<String> {
        first_text(&self.0, keys)
    }

    /// Text of a field, or `default` when missing.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// Plain string list (`["a", "b"]`); non-string entries are skipped.
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.field(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }

    /// List of titled items.
    pub fn items(&self, key: &str) -> Vec<ListItem> {
        match self.field(key) {
            Some(value) => ListItem::list_from_value(value),
            None => Vec::new(),
        }
    }

    /// Title field reconciled into two parts.
    pub fn title_parts(&self, key: &str) -> TitleParts {
        self.field(key)
            .map(TitleParts::from_value)
            .unwrap_or_default()
    }
}

/// A heading split into a plain part and an emphasised part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TitleParts {
    pub part1: String,
    pub part2: String,
}

impl TitleParts {
    pub fn new(part1: impl Into<String>, part2: impl Into<String>) -> Self {
        Self {
            part1: part1.into(),
            part2: part2.into(),
        }
    }

    /// Reconcile the title shapes the backend sends.
    ///
    /// Accepted, in precedence order: a plain string, `{text, title2}`
    /// (or `main`), `{title, title2}`, `{part1, part2}`. `highlight` is read
    /// as the second part as well.
    pub fn from_value(value: &Value) -> Self {
        let second = |v: &Value| first_text(v, &["title2", "part2", "highlight"]).unwrap_or_default();

        match value {
            Value::String(s) => Self::new(s.as_str(), ""),
            Value::Object(_) => {
                if let Some(text) = first_text(value, &["text", "main"]) {
                    Self::new(text, second(value))
                } else if let Some(title) = first_text(value, &["title"]) {
                    Self::new(title, second(value))
                } else {
                    Self::new(
                        first_text(value, &["part1"]).unwrap_or_default(),
                        second(value),
                    )
                }
            }
            other => Self::new(scalar_text(other).unwrap_or_default(), ""),
        }
    }

    /// Use `fallback` when both parts are empty.
    pub fn or(self, fallback: TitleParts) -> Self {
        if self.is_empty() { fallback } else { self }
    }

    pub fn is_empty(&self) -> bool {
        self.part1.is_empty() && self.part2.is_empty()
    }

    /// Both parts joined by a space.
    pub fn joined(&self) -> String {
        match (self.part1.is_empty(), self.part2.is_empty()) {
            (false, false) => format!("{} {}", self.part1, self.part2),
            (false, true) => self.part1.clone(),
            (true, false) => self.part2.clone(),
            (true, true) => String::new(),
        }
    }
}

/// A titled entry of a CMS list section.
///
/// Covers feature bullets, FAQ entries, agenda weeks and process steps: the
/// heading is read from `title`, `question`, `heading` or `name`, the body
/// from `description`, `content`, `answer`, `desc` or `text`, and the
/// optional label from `week`, `number`, `target` or `badge`. A bare string
/// becomes a title-only item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub label: Option<String>,
    pub title: String,
    pub body: String,
}

impl ListItem {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: None,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => {
                let title =
                    first_text(value, &["title", "question", "heading", "name"]).unwrap_or_default();
                let body = first_text(value, &["description", "content", "answer", "desc", "text"])
                    .unwrap_or_default();
                if title.is_empty() && body.is_empty() {
                    return None;
                }
                Some(Self {
                    label: first_text(value, &["week", "number", "target", "badge"]),
                    title,
                    body,
                })
            }
            other => scalar_text(other).map(|title| Self::new(title, "")),
        }
    }

    pub fn list_from_value(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.iter().filter_map(Self::from_value).collect(),
            // Some sections arrive as a JSON-encoded string.
            Value::String(s) if s.trim_start().starts_with('[') => {
                serde_json::from_str::<Value>(s)
                    .map(|v| Self::list_from_value(&v))
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for ListItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}

/// Deserialize a list section, accepting JSON-encoded strings and skipping
/// empty entries.
pub fn items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ListItem>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(ListItem::list_from_value(&value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_title_parts_plain_string() {
        assert_eq!(
            TitleParts::from_value(&json!("On-Job Support")),
            TitleParts::new("On-Job Support", "")
        );
    }

    #[test]
    fn test_title_parts_text_with_title2() {
        assert_eq!(
            TitleParts::from_value(&json!({"text": "Skill Up", "title2": "Today"})),
            TitleParts::new("Skill Up", "Today")
        );
    }

    #[test]
    fn test_title_parts_title_key() {
        assert_eq!(
            TitleParts::from_value(&json!({"title": "Empower", "part2": "Teams"})),
            TitleParts::new("Empower", "Teams")
        );
    }

    #[test]
    fn test_title_parts_part_keys_and_highlight() {
        assert_eq!(
            TitleParts::from_value(&json!({"part1": "Skill Up with", "highlight": "Us"})),
            TitleParts::new("Skill Up with", "Us")
        );
        assert!(TitleParts::from_value(&json!(null)).is_empty());
    }

    #[test]
    fn test_list_items_aliases() {
        let items = ListItem::list_from_value(&json!([
            {"question": "Is it online?", "answer": "Yes"},
            {"week": 2, "title": "Containers", "content": "Docker basics"},
            "Live projects",
            {}
        ]));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Is it online?");
        assert_eq!(items[0].body, "Yes");
        assert_eq!(items[1].label.as_deref(), Some("2"));
        assert_eq!(items[2].title, "Live projects");
    }

    #[test]
    fn test_list_items_from_encoded_string() {
        let items = ListItem::list_from_value(&json!("[{\"title\":\"A\",\"description\":\"B\"}]"));
        assert_eq!(items, vec![ListItem::new("A", "B")]);
    }

    #[test]
    fn test_page_content_accessors() {
        let content = PageContent::new(json!({
            "heading": "Explore",
            "hero_content": ["Live classes", "Mentors"],
            "empty": null
        }));
        assert_eq!(content.text("heading").as_deref(), Some("Explore"));
        assert_eq!(content.strings("hero_content").len(), 2);
        assert_eq!(content.text_or("empty", "fallback"), "fallback");
        assert!(!content.is_empty());
        assert!(PageContent::default().is_empty());
    }
}

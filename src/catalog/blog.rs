//! Blog listing filters.

use crate::api::Query;
use crate::catalog::CategorySelection;
use crate::models::BlogPost;

/// Filters of the blog listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogQuery {
    pub categories: CategorySelection,
    pub search: String,
}

impl BlogQuery {
    /// Backend query: `categories[i]=id` per selected category, then
    /// `search` when non-blank.
    pub fn to_query(&self) -> Query {
        let mut query: Query = self
            .categories
            .ids()
            .iter()
            .enumerate()
            .map(|(i, id)| (format!("categories[{i}]"), id.to_string()))
            .collect();
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(("search".to_string(), search.to_string()));
        }
        query
    }

    /// Whether `post` passes these filters.
    pub fn matches(&self, post: &BlogPost) -> bool {
        let in_category = self.categories.is_all()
            || post
                .category_id
                .is_some_and(|id| self.categories.includes(id));
        let needle = self.search.trim().to_lowercase();
        in_category && (needle.is_empty() || post.title.to_lowercase().contains(&needle))
    }

    /// Re-apply the filters locally, for backends that ignore them.
    pub fn filter(&self, posts: Vec<BlogPost>) -> Vec<BlogPost> {
        posts.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, category_id: Option<u64>) -> BlogPost {
        BlogPost {
            id,
            title: title.into(),
            category_id,
            ..BlogPost::default()
        }
    }

    #[test]
    fn test_query_params() {
        let query = BlogQuery {
            categories: CategorySelection::from_ids([4, 9]),
            search: " rust ".into(),
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("categories[0]".to_string(), "4".to_string()),
                ("categories[1]".to_string(), "9".to_string()),
                ("search".to_string(), "rust".to_string()),
            ]
        );
        assert!(BlogQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_local_filter() {
        let posts = vec![
            post(1, "Rust for Data", Some(4)),
            post(2, "Cloud Costs", Some(4)),
            post(3, "Rust Async", Some(5)),
            post(4, "Uncategorised Rust", None),
        ];
        let query = BlogQuery {
            categories: CategorySelection::only(4),
            search: "RUST".into(),
        };
        let kept = query.filter(posts.clone());
        assert_eq!(kept.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

        let all = BlogQuery::default().filter(posts);
        assert_eq!(all.len(), 4);
    }
}

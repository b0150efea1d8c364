//! Category-grouped course grid.

use crate::catalog::CategorySelection;
use crate::models::{Category, Course};

/// Courses of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGroup {
    pub category: Category,
    pub courses: Vec<Course>,
}

/// Filters read from the `/courses` URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridFilter {
    /// Free-text search (`search`)
    pub search: String,
    /// Category name (`category`)
    pub url_category: String,
    /// Category shown on its own (`view`)
    pub view_all: Option<String>,
    /// Sidebar checkboxes (`cats`)
    pub selection: CategorySelection,
}

impl GridFilter {
    /// Search mode: a query without a URL category.
    pub fn is_search_mode(&self) -> bool {
        !self.search.trim().is_empty() && self.url_category.trim().is_empty()
    }

    fn checkboxes_apply(&self) -> bool {
        !self.is_search_mode()
            && self.url_category.trim().is_empty()
            && self.view_all.is_none()
            && !self.selection.is_all()
    }
}

/// Result of filtering the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseGrid {
    pub groups: Vec<CourseGroup>,
    pub visible_count: usize,
    pub search_mode: bool,
}

fn group_by_category(categories: &[Category], courses: &[&Course]) -> Vec<CourseGroup> {
    categories
        .iter()
        .map(|category| CourseGroup {
            category: category.clone(),
            courses: courses
                .iter()
                .filter(|c| c.category_id == Some(category.id))
                .map(|c| (*c).clone())
                .collect(),
        })
        .filter(|g| !g.courses.is_empty())
        .collect()
}

/// Group and filter `courses` under `filter`.
///
/// Steps run in order: group per category, narrow to the URL category,
/// apply the search, narrow to the view-all category, then apply the
/// checkbox selection when no other mode is active.
pub fn build_grid(categories: &[Category], courses: &[Course], filter: &GridFilter) -> CourseGrid {
    let search_mode = filter.is_search_mode();
    let url_category = filter.url_category.trim().to_lowercase();

    let all: Vec<&Course> = courses.iter().collect();
    let mut groups = group_by_category(categories, &all);

    if !url_category.is_empty() {
        let matched = categories
            .iter()
            .find(|c| c.name.to_lowercase() == url_category);
        groups = match matched {
            Some(cat) => groups.into_iter().filter(|g| g.category.id == cat.id).collect(),
            None => Vec::new(),
        };
    }

    if search_mode {
        let needle = filter.search.trim().to_lowercase();
        let matched: Vec<&Course> = courses.iter().filter(|c| c.matches(&needle)).collect();
        let kept: Vec<Category> = groups.iter().map(|g| g.category.clone()).collect();
        groups = group_by_category(&kept, &matched);
    }

    if let Some(view) = &filter.view_all {
        groups.retain(|g| g.category.name.eq_ignore_ascii_case(view.trim()));
    }

    if filter.checkboxes_apply() {
        groups.retain(|g| filter.selection.includes(g.category.id));
    }

    let visible_count = groups.iter().map(|g| g.courses.len()).sum();
    CourseGrid {
        groups,
        visible_count,
        search_mode,
    }
}

/// Courses whose status matches `status`, for the home page tabs.
pub fn courses_with_status<'a>(courses: &'a [Course], status: &str) -> Vec<&'a Course> {
    courses.iter().filter(|c| c.has_status(status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u64, title: &str, category_id: u64, status: &str) -> Course {
        Course {
            id,
            title: title.into(),
            category_id: Some(category_id),
            status: status.into(),
            ..Course::default()
        }
    }

    fn fixture() -> (Vec<Category>, Vec<Course>) {
        let categories = vec![
            Category::new(1, "Cloud"),
            Category::new(2, "Data"),
            Category::new(3, "Empty"),
        ];
        let courses = vec![
            course(10, "AWS Architect", 1, "trending"),
            course(11, "Azure Admin", 1, "popular"),
            course(20, "Data Engineering", 2, "trending"),
            course(21, "Spark on AWS", 2, "free"),
        ];
        (categories, courses)
    }

    #[test]
    fn test_groups_drop_empty_categories() {
        let (cats, courses) = fixture();
        let grid = build_grid(&cats, &courses, &GridFilter::default());
        assert_eq!(grid.groups.len(), 2);
        assert_eq!(grid.visible_count, 4);
        assert!(!grid.search_mode);
    }

    #[test]
    fn test_url_category_case_insensitive() {
        let (cats, courses) = fixture();
        let filter = GridFilter {
            url_category: "cLoUd".into(),
            ..GridFilter::default()
        };
        let grid = build_grid(&cats, &courses, &filter);
        assert_eq!(grid.groups.len(), 1);
        assert_eq!(grid.groups[0].category.id, 1);

        let filter = GridFilter {
            url_category: "nope".into(),
            ..GridFilter::default()
        };
        assert!(build_grid(&cats, &courses, &filter).groups.is_empty());
    }

    #[test]
    fn test_search_regroups_matches() {
        let (cats, courses) = fixture();
        let filter = GridFilter {
            search: "AWS".into(),
            selection: CategorySelection::only(2),
            ..GridFilter::default()
        };
        let grid = build_grid(&cats, &courses, &filter);
        assert!(grid.search_mode);
        // Selection is ignored in search mode.
        assert_eq!(grid.groups.len(), 2);
        assert_eq!(grid.visible_count, 2);
    }

    #[test]
    fn test_search_matches_status() {
        let (cats, courses) = fixture();
        let filter = GridFilter {
            search: "free".into(),
            ..GridFilter::default()
        };
        let grid = build_grid(&cats, &courses, &filter);
        assert_eq!(grid.visible_count, 1);
        assert_eq!(grid.groups[0].courses[0].id, 21);
    }

    #[test]
    fn test_url_category_disables_search_mode() {
        let (cats, courses) = fixture();
        let filter = GridFilter {
            search: "spark".into(),
            url_category: "cloud".into(),
            ..GridFilter::default()
        };
        let grid = build_grid(&cats, &courses, &filter);
        assert!(!grid.search_mode);
        assert_eq!(grid.visible_count, 2);
    }

    #[test]
    fn test_view_all_keeps_one_category() {
        let (cats, courses) = fixture();
        let filter = GridFilter {
            view_all: Some("data".into()),
            selection: CategorySelection::only(1),
            ..GridFilter::default()
        };
        let grid = build_grid(&cats, &courses, &filter);
        assert_eq!(grid.groups.len(), 1);
        assert_eq!(grid.groups[0].category.name, "Data");
    }

    #[test]
    fn test_checkbox_selection() {
        let (cats, courses) = fixture();
        let filter = GridFilter {
            selection: CategorySelection::only(2),
            ..GridFilter::default()
        };
        let grid = build_grid(&cats, &courses, &filter);
        assert_eq!(grid.groups.len(), 1);
        assert_eq!(grid.visible_count, 2);
    }

    #[test]
    fn test_status_tabs() {
        let (_, courses) = fixture();
        assert_eq!(courses_with_status(&courses, "Trending").len(), 2);
        assert!(courses_with_status(&courses, "archived").is_empty());
    }
}

//! Course listing and course detail pages.

use maud::{Markup, html};

use crate::catalog::{CategoryChoice, CategorySelection, GridFilter};
use crate::models::{Config, Course, ListItem, PageContent, TitleParts};
use crate::pages::{Chrome, CourseDetailView, CoursesView, PageKey, RowPage};
use crate::render::components::{
    course_card, faq_list, heading, image, item_cards, query_url, rich, search_box,
};
use crate::render::form::demo_form;
use crate::render::layout::page;

/// `/courses` link that keeps `filter` but with `selection`.
///
/// Picking a category in search mode leaves search mode, so the search
/// and URL category are dropped then.
fn selection_url(filter: &GridFilter, selection: &CategorySelection) -> String {
    let (search, category) = if filter.is_search_mode() {
        (String::new(), String::new())
    } else {
        (filter.search.clone(), filter.url_category.clone())
    };
    query_url(
        "/courses",
        &[
            ("search", search),
            ("category", category),
            ("cats", selection.to_param().unwrap_or_default()),
        ],
    )
}

fn row_url(filter: &GridFilter, row: &RowPage, slide: usize) -> String {
    query_url(
        "/courses",
        &[
            ("search", filter.search.clone()),
            ("category", filter.url_category.clone()),
            ("cats", filter.selection.to_param().unwrap_or_default()),
            ("row", row.group.category.id.to_string()),
            ("slide", slide.to_string()),
        ],
    )
}

fn sidebar(view: &CoursesView) -> Markup {
    let filter = &view.filter;
    let search_mode = filter.is_search_mode();
    let current = &filter.selection;
    let all = current.select(CategoryChoice::All, search_mode);
    html! {
        aside.sidebar {
            h3 { "Categories" }
            a class=[(current.is_checked(CategoryChoice::All) && !search_mode).then_some("checked")]
                href=(selection_url(filter, &all)) {
                "All"
            }
            @for category in &view.categories {
                @let choice = CategoryChoice::Id(category.id);
                @let next = current.select(choice, search_mode);
                a class=[(current.is_checked(choice) && !search_mode).then_some("checked")]
                    href=(selection_url(filter, &next)) {
                    (category.name)
                }
            }
        }
    }
}

fn row(config: &Config, filter: &GridFilter, row: &RowPage) -> Markup {
    let window = &row.window;
    html! {
        div.course-row {
            div.row-head {
                h2 { (row.group.category.name) }
                @if filter.view_all.is_none() && window.total_pages > 1 {
                    a href=(query_url("/courses", &[("view", row.group.category.name.clone())])) {
                        "View all"
                    }
                }
            }
            div.course-grid {
                @for course in row.visible_courses() {
                    (course_card(config, course))
                }
            }
            @if window.total_pages > 1 {
                nav.pager {
                    @if window.has_prev() {
                        a.prev href=(row_url(filter, row, window.number() - 1)) { "‹" }
                    }
                    span { (window.number()) " / " (window.total_pages) }
                    @if window.has_next() {
                        a.next href=(row_url(filter, row, window.number() + 1)) { "›" }
                    }
                }
            }
        }
    }
}

pub fn courses(config: &Config, chrome: &Chrome, view: &CoursesView) -> Markup {
    let content = &view.content;
    let filter = &view.filter;
    let title = content
        .title_parts("heading")
        .or(TitleParts::new("Explore Our", "Courses"));
    let body = html! {
        section.courses-hero.alt {
            div.wrap {
                (heading(1, &title))
                @if let Some(sub) = content.text("subheading") {
                    p.subtitle { (sub) }
                }
                (search_box(config, "/courses", &filter.search, "Search courses"))
            }
        }
        section {
            div.wrap.catalog {
                (sidebar(view))
                div {
                    @if view.grid.search_mode {
                        p.result-count {
                            (view.grid.visible_count) " results for “" (filter.search) "” "
                            a href="/courses" { "Clear" }
                        }
                    }
                    @if let Some(name) = &filter.view_all {
                        a.back href="/courses" { "‹ All categories" }
                        span.sr-only { (name) }
                    }
                    @if view.rows.is_empty() {
                        p.empty { "No courses found." }
                    }
                    @for r in &view.rows {
                        (row(config, filter, r))
                    }
                }
            }
        }
    };
    page(config, chrome, &view.meta, PageKey::Courses.path(), body)
}

fn list_section(class: &str, title: TitleParts, items: &[ListItem]) -> Markup {
    html! {
        @if !items.is_empty() {
            section class=(class) {
                div.wrap {
                    (heading(2, &title))
                    (item_cards(items))
                }
            }
        }
    }
}

fn course_hero(config: &Config, course: &Course) -> Markup {
    html! {
        section.course-hero.alt {
            div.wrap.hero {
                div {
                    h1 { (course.display_title()) }
                    div.course-stats {
                        @if let Some(rating) = course.rating {
                            span.rating { "★ " (format!("{rating:.1}")) }
                        }
                        @if !course.students.is_empty() {
                            span { (course.students) " students enrolled" }
                        }
                    }
                    @if !course.description.is_empty() {
                        div.body { (rich(&course.description)) }
                    }
                    a.button href="#demo" { "Book a free demo" }
                }
                @if !course.image.is_empty() {
                    div { (image(config, &course.image, &course.title)) }
                }
            }
        }
    }
}

fn agenda(items: &[ListItem]) -> Markup {
    html! {
        @if !items.is_empty() {
            section.agenda {
                div.wrap {
                    (heading(2, &TitleParts::new("Training", "Agenda")))
                    ol.agenda-list {
                        @for (i, item) in items.iter().enumerate() {
                            li {
                                span.badge {
                                    (item.label.clone().unwrap_or_else(|| format!("Week {}", i + 1)))
                                }
                                h3 { (item.title) }
                                @if !item.body.is_empty() {
                                    div { (rich(&item.body)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn job_assistance(content: &PageContent) -> Markup {
    let title = content
        .title_parts("title")
        .or(TitleParts::new("Job Assistance", "Program"));
    let subtitle = content.text_of(&["subtitle", "description"]).unwrap_or_else(|| {
        "Our job assistance program helps you land your dream role".to_string()
    });
    let mut points = content.items("points");
    if points.is_empty() {
        points = content.items("features");
    }
    html! {
        section.job-assistance.alt {
            div.wrap {
                (heading(2, &title))
                p.subtitle { (subtitle) }
                (item_cards(&points))
            }
        }
    }
}

fn placements(config: &Config, content: &PageContent, agenda_len: usize) -> Markup {
    let title = content.title_parts("placements_title");
    let images = content.strings("placement_images");
    let reserve = content
        .title_parts("reserve_title")
        .or(TitleParts::new("Reserve Your Spot", ""));
    let block = |key: &str, index: usize, fallback: String| {
        content
            .strings(key)
            .get(index)
            .cloned()
            .unwrap_or(fallback)
    };
    html! {
        @if !title.is_empty() || !images.is_empty() {
            section.placements {
                div.wrap {
                    (heading(2, &title))
                    @if let Some(sub) = content.text("placements_subtitle") {
                        p.subtitle { (sub) }
                    }
                    div.logos {
                        @for src in &images {
                            (image(config, src, "Placement"))
                        }
                    }
                }
            }
        }
        section.reserve.alt {
            div.wrap {
                (heading(2, &reserve))
                p.subtitle { (content.text_or("reserve_subtitle", "Join our exclusive program")) }
                div.reserve-blocks {
                    div { strong { (block("reserve_block1", 0, agenda_len.to_string())) } " " (block("reserve_block1", 1, "Days".into())) }
                    div { strong { (block("reserve_block2", 0, "0".into())) } " " (block("reserve_block2", 1, "Hours".into())) }
                    div { strong { (block("reserve_block3", 0, "0".into())) } " " (block("reserve_block3", 1, "Minutes".into())) }
                }
                a.button href="#demo" { (content.text_or("reserve_button_name", "Enroll Now")) }
            }
        }
    }
}

pub fn course_detail(config: &Config, chrome: &Chrome, view: &CourseDetailView) -> Markup {
    let path = PageKey::Courses.path();
    let Some(course) = &view.course else {
        let body = html! {
            section.not-found {
                div.wrap {
                    h1 { "Course Not Found" }
                    p { "The course you are looking for does not exist or is no longer offered." }
                    a.button href=(path) { "Back to Courses" }
                }
            }
        };
        return page(config, chrome, &view.meta, path, body);
    };

    let details = course.details_or_default();
    let body = html! {
        (course_hero(config, course))
        (list_section("why-choose", TitleParts::new("Why Choose", "This Course"), &details.why_choose))
        (list_section("who-should-join alt", TitleParts::new("Who Should", "Join"), &details.who_should_join))
        (list_section("key-outcomes", TitleParts::new("Key", "Outcomes"), &details.key_outcomes))
        (agenda(&details.agenda))
        (job_assistance(&view.job_assistance))
        @if !view.faqs.is_empty() {
            section.faqs {
                div.wrap {
                    (heading(2, &TitleParts::new("Frequently Asked", "Questions")))
                    (faq_list(&view.faqs))
                }
            }
        }
        (placements(config, &view.placements, details.agenda.len()))
        section.demo #demo {
            div.wrap { (demo_form(&view.demo)) }
        }
    };
    page(config, chrome, &view.meta, path, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CourseGrid, CourseGroup, PageWindow};
    use crate::models::{Category, CourseDetails, PageMeta};
    use crate::pages::DemoForm;

    fn courses_view(filter: GridFilter) -> CoursesView {
        let group = CourseGroup {
            category: Category::new(1, "Cloud"),
            courses: (1..=4)
                .map(|id| Course {
                    id,
                    title: format!("Cloud {id}"),
                    ..Course::default()
                })
                .collect(),
        };
        CoursesView {
            meta: PageMeta::fallback("Courses", "", &[]),
            content: PageContent::default(),
            categories: vec![Category::new(1, "Cloud"), Category::new(2, "Data")],
            grid: CourseGrid {
                groups: vec![group.clone()],
                visible_count: 4,
                search_mode: filter.is_search_mode(),
            },
            rows: vec![RowPage {
                window: PageWindow::new(4, 3, 0),
                group,
            }],
            filter,
        }
    }

    #[test]
    fn test_sidebar_toggles_selection() {
        let filter = GridFilter {
            selection: CategorySelection::only(1),
            ..GridFilter::default()
        };
        let html = courses(&Config::default(), &Chrome::default(), &courses_view(filter))
            .into_string();
        // Clicking the checked category empties the selection back to "all".
        assert!(html.contains(r#"<a class="checked" href="/courses">Cloud</a>"#));
        assert!(html.contains(r#"href="/courses?cats=1%2C2">Data</a>"#));
        assert!(html.contains(r#"href="/courses?cats=1&amp;row=1&amp;slide=2""#));
    }

    #[test]
    fn test_sidebar_in_search_mode_replaces_selection() {
        let filter = GridFilter {
            search: "aws".into(),
            selection: CategorySelection::only(1),
            ..GridFilter::default()
        };
        let html = courses(&Config::default(), &Chrome::default(), &courses_view(filter))
            .into_string();
        assert!(html.contains(r#"<a href="/courses?cats=2">Data</a>"#));
        assert!(html.contains("4 results for"));
    }

    #[test]
    fn test_missing_course_page() {
        let view = CourseDetailView {
            meta: PageMeta::fallback("Course Not Found", "", &[]),
            course: None,
            job_assistance: PageContent::default(),
            faqs: Vec::new(),
            placements: PageContent::default(),
            demo: DemoForm::default(),
        };
        let html = course_detail(&Config::default(), &Chrome::default(), &view).into_string();
        assert!(html.contains("<h1>Course Not Found</h1>"));
        assert!(html.contains("Back to Courses"));
    }

    #[test]
    fn test_course_detail_sections() {
        let view = CourseDetailView {
            meta: PageMeta::fallback("Rust", "", &[]),
            course: Some(Course {
                id: 3,
                title: "Rust".into(),
                details: Some(CourseDetails {
                    agenda: vec![ListItem::new("Ownership", ""), ListItem::new("Traits", "")],
                    ..CourseDetails::default()
                }),
                ..Course::default()
            }),
            job_assistance: PageContent::default(),
            faqs: vec![ListItem::new("Online?", "Yes")],
            placements: PageContent::default(),
            demo: DemoForm::default(),
        };
        let html = course_detail(&Config::default(), &Chrome::default(), &view).into_string();
        assert!(html.contains("Week 2"));
        assert!(html.contains("Job Assistance"));
        assert!(html.contains("Online?"));
        // Reserve block counts the agenda weeks by default.
        assert!(html.contains("<strong>2</strong> Days"));
        assert!(!html.contains("why-choose"));
    }
}

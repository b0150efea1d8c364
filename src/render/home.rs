//! Home page.

use maud::{Markup, html};

use crate::models::{Config, TitleParts};
use crate::pages::{Chrome, HomeView, PageKey};
use crate::render::components::{
    blog_card, course_card, heading, image, item_cards, query_url, rich, search_box,
};
use crate::render::layout::page;
use crate::search::INDUSTRY_SKILLS;

const DEFAULT_HERO: &str = "<h1>Learn the skills <span class=\"hl\">employers hire for</span></h1>";

fn tab_url(tab: &str, slide: usize) -> String {
    let slide = if slide > 1 { slide.to_string() } else { String::new() };
    query_url("/", &[("status", tab.to_lowercase()), ("slide", slide)])
}

fn hero(config: &Config, view: &HomeView) -> Markup {
    let content = &view.content;
    let heading_html = content
        .text("hero_heading")
        .unwrap_or_else(|| DEFAULT_HERO.to_string());
    let popular = content.strings("hero_popular");
    html! {
        section.home-hero {
            div.wrap.hero {
                div {
                    (rich(&heading_html))
                    @for line in content.strings("hero_content") {
                        p { (line) }
                    }
                    (search_box(config, "/courses", "", "What do you want to learn?"))
                    @if !popular.is_empty() {
                        div.chips {
                            span { "Popular: " }
                            @for term in &popular {
                                a href=(query_url("/courses", &[("search", term.clone())])) { (term) }
                            }
                        }
                    }
                }
                @if let Some(src) = content.text("hero_image") {
                    div { (image(config, &src, &config.site.name)) }
                }
            }
        }
    }
}

fn skills(config: &Config) -> Markup {
    html! {
        section.skills.alt {
            div.wrap {
                h2 { "Explore in-demand " span.hl { "skills" } }
                div.chips {
                    @for skill in INDUSTRY_SKILLS.iter().take(config.listing.suggestion_limit) {
                        a href=(query_url("/courses", &[("search", skill.to_string())])) { (skill) }
                    }
                }
            }
        }
    }
}

fn explore(config: &Config, view: &HomeView) -> Markup {
    let content = &view.content;
    let window = &view.window;
    html! {
        section.explore #courses {
            div.wrap {
                @match content.text("explore_heading") {
                    Some(h) => { (rich(&h)) }
                    None => { h2 { "Explore our " span.hl { "courses" } } }
                }
                @if let Some(body) = content.text("explore_content") {
                    div.body { (rich(&body)) }
                }
                nav.tabs {
                    @for tab in &view.tabs {
                        a class=[tab.eq_ignore_ascii_case(&view.active_tab).then_some("active")] href=(tab_url(tab, 1)) {
                            (tab)
                        }
                    }
                }
                @if view.tab_courses.is_empty() {
                    p.empty { "No courses in this category yet." }
                } @else {
                    div.course-grid {
                        @for course in view.visible_courses() {
                            (course_card(config, course))
                        }
                    }
                    @if window.total_pages > 1 {
                        nav.pager {
                            @if window.has_prev() {
                                a.prev href=(tab_url(&view.active_tab, window.number() - 1)) { "‹" }
                            }
                            span { (window.start()) "–" (window.end()) " of " (window.total_items) }
                            @if window.has_next() {
                                a.next href=(tab_url(&view.active_tab, window.number() + 1)) { "›" }
                            }
                        }
                    }
                }
                a.button href="/courses" { "View all courses" }
            }
        }
    }
}

fn key_features(view: &HomeView) -> Markup {
    let content = &view.content;
    let title = content
        .title_parts("key_features_title")
        .or(TitleParts::new("Key", "Features"));
    html! {
        section.key-features.alt {
            div.wrap {
                (heading(2, &title))
                @if let Some(body) = content.text("key_features_content") {
                    div.body { (rich(&body)) }
                }
                (item_cards(&content.items("key_features_points")))
            }
        }
    }
}

fn job_assistance(view: &HomeView) -> Markup {
    let content = &view.content;
    let title = content
        .title_parts("job_assistance_heading")
        .or(TitleParts::new("Job", "Assistance"));
    html! {
        section.job-assistance {
            div.wrap {
                (heading(2, &title))
                @if let Some(body) = content.text("job_assistance_content") {
                    div.body { (rich(&body)) }
                }
                (item_cards(&content.items("job_assistance_points")))
            }
        }
    }
}

fn job_support(view: &HomeView) -> Markup {
    let content = &view.content;
    let title = content.title_parts("job_support_title");
    if title.is_empty() {
        return html! {};
    }
    html! {
        section.job-support.alt {
            div.wrap {
                (heading(2, &title))
                @if let Some(body) = content.text("job_support_content") {
                    div.body { (rich(&body)) }
                }
                @let payments = content.strings("job_support_payment_types");
                @if !payments.is_empty() {
                    ul.payment-types {
                        @for kind in &payments {
                            li { (kind) }
                        }
                    }
                }
                a.button href=(PageKey::OnJobSupport.path()) {
                    (content.text_or("job_support_button", "Get Support"))
                }
            }
        }
    }
}

fn recent_blogs(config: &Config, view: &HomeView) -> Markup {
    let title = view
        .content
        .title_parts("blog_section_heading")
        .or(TitleParts::new("Latest", "Blogs"));
    html! {
        @if !view.recent_blogs.is_empty() {
            section.recent-blogs {
                div.wrap {
                    (heading(2, &title))
                    div.blog-grid {
                        @for post in &view.recent_blogs {
                            (blog_card(config, post))
                        }
                    }
                    a.button href="/blog" { "Read the blog" }
                }
            }
        }
    }
}

pub fn home(config: &Config, chrome: &Chrome, view: &HomeView) -> Markup {
    let body = html! {
        (hero(config, view))
        (skills(config))
        (explore(config, view))
        (key_features(view))
        (job_assistance(view))
        (job_support(view))
        (recent_blogs(config, view))
    };
    page(config, chrome, &view.meta, PageKey::Home.path(), body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::PageWindow;
    use crate::models::{Course, PageContent, PageMeta};

    fn view(content: PageContent, courses: usize) -> HomeView {
        let tab_courses: Vec<Course> = (0..courses as u64)
            .map(|id| Course {
                id,
                title: format!("Course {id}"),
                status: "trending".into(),
                ..Course::default()
            })
            .collect();
        HomeView {
            meta: PageMeta::fallback("Home", "", &[]),
            content,
            tabs: vec!["Trending".into(), "Popular".into()],
            active_tab: "trending".into(),
            window: PageWindow::new(tab_courses.len(), 3, 0),
            tab_courses,
            recent_blogs: Vec::new(),
        }
    }

    #[test]
    fn test_home_with_defaults() {
        let html = home(&Config::default(), &Chrome::default(), &view(PageContent::default(), 0))
            .into_string();
        assert!(html.contains("employers hire for"));
        assert!(html.contains("No courses in this category yet."));
        assert!(html.contains(r#"<a class="active" href="/?status=trending">Trending</a>"#));
        assert!(html.contains(r#"<a href="/?status=popular">Popular</a>"#));
        assert!(!html.contains("class=\"\""));
        assert!(!html.contains("recent-blogs"));
    }

    #[test]
    fn test_home_carousel_links() {
        let content = PageContent::new(json!({"hero_popular": ["AWS"]}));
        let html = home(&Config::default(), &Chrome::default(), &view(content, 5)).into_string();
        assert!(html.contains("1–3 of 5"));
        assert!(html.contains(r#"href="/?status=trending&amp;slide=2""#));
        assert!(html.contains(r#"href="/courses?search=AWS""#));
    }
}

//! Shared markup pieces.

use maud::{Markup, PreEscaped, html};
use url::form_urlencoded;

use crate::catalog::PageWindow;
use crate::models::{BlogPost, Config, Course, ListItem, TitleParts};
use crate::pages::meta::asset_url;

/// `path?k=v&..` with blank values left out.
pub fn query_url(path: &str, pairs: &[(&str, String)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs.iter().filter(|(_, v)| !v.trim().is_empty()) {
        query.append_pair(key, value);
        any = true;
    }
    if any {
        format!("{path}?{}", query.finish())
    } else {
        path.to_string()
    }
}

/// CMS-authored HTML, emitted as is.
pub fn rich(html: &str) -> Markup {
    html! { (PreEscaped(html)) }
}

/// Heading with an emphasised second part.
pub fn heading(level: u8, title: &TitleParts) -> Markup {
    let inner = html! {
        (title.part1)
        @if !title.part2.is_empty() {
            " " span.hl { (title.part2) }
        }
    };
    match level {
        1 => html! { h1 { (inner) } },
        3 => html! { h3 { (inner) } },
        _ => html! { h2 { (inner) } },
    }
}

pub fn image(config: &Config, src: &str, alt: &str) -> Markup {
    html! {
        img src=(asset_url(config, src)) alt=(alt) loading="lazy";
    }
}

/// Titled entries as cards; labelled entries show their label as a badge.
pub fn item_cards(items: &[ListItem]) -> Markup {
    html! {
        @if !items.is_empty() {
            div.cards {
                @for item in items {
                    div.card {
                        @if let Some(label) = &item.label {
                            span.badge { (label) }
                        }
                        @if !item.title.is_empty() {
                            h3 { (item.title) }
                        }
                        @if !item.body.is_empty() {
                            div.card-body { (rich(&item.body)) }
                        }
                    }
                }
            }
        }
    }
}

/// Collapsible question/answer list; the first entry starts open.
pub fn faq_list(items: &[ListItem]) -> Markup {
    html! {
        div.faq {
            @for (i, item) in items.iter().enumerate() {
                details open[i == 0] {
                    summary {
                        span.faq-num { (format!("{:02}", i + 1)) }
                        " " (item.title)
                    }
                    div.faq-answer { (rich(&item.body)) }
                }
            }
        }
    }
}

pub fn course_card(config: &Config, course: &Course) -> Markup {
    html! {
        a.course-card href=(format!("/course-details/{}", course.id)) {
            (image(config, &course.image, &course.title))
            div.course-card-body {
                h3 { (course.display_title()) }
                div.course-stats {
                    @if let Some(rating) = course.rating {
                        span.rating { "★ " (format!("{rating:.1}")) }
                    }
                    @if !course.students.is_empty() {
                        span.students { (course.students) " students" }
                    }
                }
                @if !course.status.is_empty() {
                    span.badge { (course.status) }
                }
            }
        }
    }
}

pub fn blog_card(config: &Config, post: &BlogPost) -> Markup {
    html! {
        a.blog-card href=(post.path()) {
            (image(config, &post.thumbnail_image, &post.title))
            div.blog-card-body {
                @let date = post.display_date();
                @if !date.is_empty() {
                    time { (date) }
                }
                h3 { (post.title) }
                @if !post.description.is_empty() {
                    p { (post.description) }
                }
            }
        }
    }
}

/// Previous / next links with the 1-based page number in `param`.
pub fn pager(window: &PageWindow, link: impl Fn(usize) -> String) -> Markup {
    html! {
        @if window.total_pages > 1 {
            nav.pager {
                @if window.has_prev() {
                    a.prev href=(link(window.number() - 1)) { "‹ Prev" }
                }
                span { (window.number()) " / " (window.total_pages) }
                @if window.has_next() {
                    a.next href=(link(window.number() + 1)) { "Next ›" }
                }
            }
        }
    }
}

/// Search box wired to `/api/suggestions`.
pub fn search_box(config: &Config, action: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        form.search-box action=(action) method="get" data-debounce=(config.search.debounce_ms) {
            input type="search" name="search" value=(value) placeholder=(placeholder)
                autocomplete="off";
            button type="submit" { "Search" }
            ul.suggestions hidden {}
        }
    }
}

/// Notice shown when a section's content could not be loaded.
pub fn failure(message: &str) -> Markup {
    html! { p.load-failed role="alert" { (message) } }
}

pub const PAGE_CSS: &str = r#"
:root{--fg:#1d2330;--fg2:#4a5466;--accent:#0b5ed7;--hl:#f28c28;--bg2:#f4f7fb;--border:#dde3ec}
*{box-sizing:border-box}body{margin:0;font-family:system-ui,sans-serif;color:var(--fg);line-height:1.5}
a{color:var(--accent)}img{max-width:100%;height:auto}
.wrap{max-width:1140px;margin:0 auto;padding:0 1rem}
header.site{display:flex;align-items:center;justify-content:space-between;padding:.75rem 1rem;border-bottom:1px solid var(--border)}
header.site nav a{margin-left:1rem;text-decoration:none;color:var(--fg2)}header.site nav a.active{color:var(--accent);font-weight:600}
section{padding:3rem 0}section.alt{background:var(--bg2)}
.hl{color:var(--hl)}.badge{display:inline-block;font-size:.75rem;padding:.1rem .5rem;border-radius:1rem;background:var(--bg2);text-transform:capitalize}
.hero{display:grid;grid-template-columns:1fr 1fr;gap:2rem;align-items:center}
.cards,.course-grid,.blog-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1.25rem}
.card,.course-card,.blog-card{border:1px solid var(--border);border-radius:.5rem;padding:1rem;text-decoration:none;color:inherit;background:#fff}
.course-stats{display:flex;gap:1rem;font-size:.85rem;color:var(--fg2)}
.tabs a{margin-right:1rem}.tabs a.active{font-weight:700}
.pager{display:flex;gap:1rem;align-items:center;justify-content:center;margin-top:1.5rem}
.chips a{display:inline-block;margin:.25rem;padding:.25rem .75rem;border:1px solid var(--border);border-radius:1rem;text-decoration:none}
.catalog{display:grid;grid-template-columns:240px 1fr;gap:2rem}
.sidebar a{display:block;padding:.25rem 0;text-decoration:none}.sidebar a.checked{font-weight:700}
.faq details{border:1px solid var(--border);border-radius:.5rem;margin:.5rem 0;padding:.75rem 1rem}
.search-box{position:relative;display:flex;gap:.5rem}.search-box input{flex:1;padding:.5rem}
.suggestions{position:absolute;top:100%;left:0;right:0;background:#fff;border:1px solid var(--border);list-style:none;margin:0;padding:0;z-index:5}
.suggestions li{padding:.4rem .75rem;cursor:pointer}
.demo-form{display:grid;gap:.75rem;max-width:520px}.demo-form label{display:grid;gap:.25rem}
.course-options{max-height:12rem;overflow:auto;border:1px solid var(--border);padding:.5rem}
.form-message{font-weight:600}.load-failed{color:#b42318;text-align:center;padding:2rem}
footer.site{background:#0f1b2d;color:#cfd8e3;padding:3rem 1rem}footer.site a{color:#cfd8e3}
.footer-cols{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:2rem}
.cookie-banner{position:fixed;bottom:0;left:0;right:0;background:#fff;border-top:1px solid var(--border);padding:1rem;display:flex;gap:1rem;justify-content:center}
@media(max-width:800px){.hero,.catalog{grid-template-columns:1fr}}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_skips_blank_values() {
        assert_eq!(query_url("/courses", &[("search", String::new())]), "/courses");
        assert_eq!(
            query_url(
                "/courses",
                &[("search", "c++ & go".into()), ("cats", "1,2".into())]
            ),
            "/courses?search=c%2B%2B+%26+go&cats=1%2C2"
        );
    }

    #[test]
    fn test_heading_highlight() {
        let markup = heading(2, &TitleParts::new("Why Choose", "Us")).into_string();
        assert_eq!(markup, r#"<h2>Why Choose <span class="hl">Us</span></h2>"#);
    }

    #[test]
    fn test_faq_first_open() {
        let items = vec![ListItem::new("Q1", "A1"), ListItem::new("Q2", "A2")];
        let markup = faq_list(&items).into_string();
        assert_eq!(markup.matches("<details open>").count(), 1);
        assert!(markup.contains("02"));
    }

    #[test]
    fn test_pager_hidden_for_single_page() {
        let window = PageWindow::new(3, 9, 0);
        assert!(pager(&window, |n| format!("?page={n}")).into_string().is_empty());

        let window = PageWindow::new(20, 9, 1);
        let markup = pager(&window, |n| format!("?page={n}")).into_string();
        assert!(markup.contains(r#"href="?page=1""#));
        assert!(markup.contains(r#"href="?page=3""#));
    }
}

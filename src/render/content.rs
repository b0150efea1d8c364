//! CMS-driven marketing pages.

use maud::{Markup, html};

use crate::models::{Config, PageContent, TitleParts};
use crate::pages::meta::not_found_meta;
use crate::pages::{Chrome, ContentView, PageKey};
use crate::render::components::{failure, faq_list, heading, rich};
use crate::render::form::demo_form;
use crate::render::layout::page;
use crate::render::sections::{
    ABOUT, CONTACT, CORPORATE, DEMO, ON_JOB_SUPPORT, SectionSpec, section, sections,
};

fn specs(key: PageKey) -> &'static [SectionSpec] {
    match key {
        PageKey::About => ABOUT,
        PageKey::CorporateTraining => CORPORATE,
        PageKey::OnJobSupport => ON_JOB_SUPPORT,
        PageKey::Contact => CONTACT,
        _ => &[],
    }
}

fn terms(content: &PageContent) -> Markup {
    let title = content
        .title_parts("title")
        .or(TitleParts::new("Terms &", "Conditions"));
    html! {
        section.terms {
            div.wrap {
                (heading(1, &title))
                @if let Some(updated) = content.text("last_updated_on") {
                    p.updated { "Last updated on " (updated) }
                }
                div.body { (rich(&content.text("content").unwrap_or_default())) }
            }
        }
    }
}

pub fn content_page(config: &Config, chrome: &Chrome, view: &ContentView) -> Markup {
    let content = view.content.clone().unwrap_or_default();
    let body = html! {
        @if view.content.is_none() {
            section {
                div.wrap {
                    h1 { (view.key.label()) }
                    (failure(view.failure_message()))
                }
            }
        } @else if view.key == PageKey::Terms {
            (terms(&content))
        } @else {
            (sections(config, specs(view.key), &content))
        }
        @if !view.faqs.is_empty() {
            section.faqs {
                div.wrap {
                    (heading(2, &TitleParts::new("FAQs for", "HR Professionals")))
                    (faq_list(&view.faqs))
                }
            }
        }
        @if view.key != PageKey::Terms {
            (section(config, &DEMO, &content))
            section.demo #demo {
                div.wrap { (demo_form(&view.demo)) }
            }
        }
    };
    page(config, chrome, &view.meta, view.key.path(), body)
}

/// Page for routes the site does not serve.
pub fn not_found(config: &Config, chrome: &Chrome) -> Markup {
    let body = html! {
        section.not-found {
            div.wrap {
                h1 { "Page Not Found" }
                p { "The page you are looking for does not exist or has moved." }
                a.button href=(PageKey::Home.path()) { "Go Home" }
            }
        }
    };
    page(config, chrome, &not_found_meta("Page", config), "", body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{ListItem, PageMeta};
    use crate::pages::DemoForm;

    fn view(key: PageKey, content: Option<PageContent>) -> ContentView {
        ContentView {
            key,
            meta: PageMeta::fallback(key.label(), "", &[]),
            content,
            faqs: Vec::new(),
            demo: DemoForm::default(),
        }
    }

    #[test]
    fn test_failed_page_shows_notice_and_form() {
        let html = content_page(
            &Config::default(),
            &Chrome::default(),
            &view(PageKey::OnJobSupport, None),
        )
        .into_string();
        assert!(html.contains("Failed to load On-Job-Support content."));
        assert!(html.contains(r#"<form class="demo-form""#));
    }

    #[test]
    fn test_terms_page() {
        let content = PageContent::new(json!({
            "title": "Terms of Use",
            "content": "<ol><li>Be nice</li></ol>",
            "last_updated_on": "2025-01-06",
        }));
        let view = view(PageKey::Terms, Some(content));
        let html = content_page(&Config::default(), &Chrome::default(), &view).into_string();
        assert!(html.contains("<h1>Terms of Use</h1>"));
        assert!(html.contains("<ol><li>Be nice</li></ol>"));
        assert!(html.contains("Last updated on 2025-01-06"));
        assert!(!html.contains(r#"<form class="demo-form""#));
    }

    #[test]
    fn test_corporate_page_with_faqs() {
        let mut v = view(
            PageKey::CorporateTraining,
            Some(PageContent::new(json!({"hero_title": "Train your team"}))),
        );
        v.faqs = vec![ListItem::new("Pricing?", "Per seat")];
        let html = content_page(&Config::default(), &Chrome::default(), &v).into_string();
        assert!(html.contains("Train your team"));
        assert!(html.contains("HR Professionals"));
        assert!(html.contains("Pricing?"));
    }

    #[test]
    fn test_not_found_page() {
        let html = not_found(&Config::default(), &Chrome::default()).into_string();
        assert!(html.contains("<h1>Page Not Found</h1>"));
        assert!(html.contains("Page Not Found | "));
    }
}

// src/render/layout.rs

//! Document shell: `<head>`, header menu, footer and cookie banner.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::models::{Config, PageMeta};
use crate::pages::Chrome;
use crate::pages::meta::asset_url;
use crate::render::components::PAGE_CSS;
use crate::render::scripts;

/// Wrap `body` in the site chrome. `path` marks the active menu entry.
pub fn page(config: &Config, chrome: &Chrome, meta: &PageMeta, path: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(meta))
            body {
                (header(config, chrome, path))
                main { (body) }
                (footer(config, chrome))
                (cookie_banner())
                script { (PreEscaped(scripts::SEARCH_BOX)) }
                script { (PreEscaped(scripts::DEMO_FORM)) }
                script { (PreEscaped(scripts::NEWSLETTER)) }
                script { (PreEscaped(scripts::COOKIE_CONSENT)) }
            }
        }
    }
}

fn head(meta: &PageMeta) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (meta.title) }
            meta name="description" content=(meta.description);
            @if !meta.keywords.is_empty() {
                meta name="keywords" content=(meta.keywords.join(", "));
            }
            @if let Some(canonical) = &meta.canonical {
                link rel="canonical" href=(canonical);
                meta property="og:url" content=(canonical);
            }
            meta property="og:title" content=(meta.title);
            meta property="og:description" content=(meta.description);
            meta property="og:type" content=(meta.og_type);
            @if let Some(image) = &meta.image {
                meta property="og:image" content=(image);
                meta name="twitter:card" content="summary_large_image";
            }
            style { (PreEscaped(PAGE_CSS)) }
        }
    }
}

fn header(config: &Config, chrome: &Chrome, path: &str) -> Markup {
    let logo = chrome.header.logo_or(&config.site.logo);
    html! {
        header.site {
            a.logo href="/" {
                img src=(asset_url(config, logo)) alt=(config.site.name) height="40";
            }
            nav {
                @for link in chrome.header.menu() {
                    a class=[link.is_active(path).then_some("active")] href=(link.slug)
                        target=[link.new_tab.then_some("_blank")] {
                        (link.text)
                    }
                }
            }
        }
    }
}

fn footer(config: &Config, chrome: &Chrome) -> Markup {
    let footer = &chrome.footer;
    let contact = footer.contact_details();
    html! {
        footer.site {
            div.wrap {
                form #newsletter {
                    h3 { (footer.get_in_touch()) }
                    input type="email" name="email" placeholder=(footer.email_placeholder()) required;
                    button type="submit" { "Subscribe" }
                    p.form-message {}
                }
                div.footer-cols {
                    div {
                        h4 { (config.site.name) }
                        p { (footer.about()) }
                    }
                    div {
                        h4 { (footer.explore()) }
                        @for link in footer.explore_links() {
                            a href=(link.slug) { (link.text) } br;
                        }
                    }
                    div {
                        h4 { (footer.support()) }
                        @for link in footer.support_links() {
                            a href=(link.slug) { (link.text) } br;
                        }
                    }
                    div {
                        h4 { (footer.contact()) }
                        @if let Some(phone) = &contact.phone {
                            a href=(format!("tel:{}", phone.replace(' ', ""))) { (phone) } br;
                        }
                        @if let Some(email) = &contact.email {
                            a href=(format!("mailto:{email}")) { (email) } br;
                        }
                        @for location in &contact.locations {
                            span { (location) } br;
                        }
                    }
                    div {
                        h4 { (footer.follow_us()) }
                        @for (platform, href) in footer.social() {
                            a href=(href) target="_blank" rel="noopener" { (platform) } br;
                        }
                    }
                }
                p.copyright { (footer.copyright(&config.site.name)) }
            }
        }
    }
}

fn cookie_banner() -> Markup {
    html! {
        div.cookie-banner #cookie-banner hidden {
            span { "We use cookies to improve your experience." }
            button type="button" data-consent="accepted" { "Accept" }
            button type="button" data-consent="declined" { "Decline" }
        }
    }
}

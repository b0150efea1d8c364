//! Data-driven marketing sections.
//!
//! CMS pages are a sequence of sections that differ only in which fields
//! they read. Each [`SectionSpec`] names those fields; [`section`] renders
//! whatever of them is present and skips the section when nothing is.

use maud::{Markup, html};

use crate::models::{Config, ListItem, PageContent, TitleParts};
use crate::render::components::{heading, image, item_cards, rich};

#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub class: &'static str,
    /// Title field, read as [`TitleParts`]
    pub title: &'static str,
    /// Built-in title when the field is missing
    pub default_title: &'static str,
    /// Plain subtitle fields, first present wins
    pub subtitle: &'static [&'static str],
    /// HTML body field
    pub body: &'static str,
    pub image: &'static str,
    /// List fields, concatenated
    pub items: &'static [&'static str],
    /// `(title, body)` field pairs rendered as extra items
    pub pairs: &'static [(&'static str, &'static str)],
    /// `(text, href)` fields of a call-to-action button
    pub button: Option<(&'static str, &'static str)>,
    /// Map embed URL field
    pub embed: &'static str,
    pub footer: &'static str,
}

impl SectionSpec {
    pub const EMPTY: SectionSpec = SectionSpec {
        class: "",
        title: "",
        default_title: "",
        subtitle: &[],
        body: "",
        image: "",
        items: &[],
        pairs: &[],
        button: None,
        embed: "",
        footer: "",
    };

    fn title(&self, content: &PageContent) -> TitleParts {
        let fallback = TitleParts::new(self.default_title, "");
        if self.title.is_empty() {
            return fallback;
        }
        content.title_parts(self.title).or(fallback)
    }

    fn items(&self, content: &PageContent) -> Vec<ListItem> {
        let mut items: Vec<ListItem> = self
            .items
            .iter()
            .flat_map(|key| content.items(key))
            .collect();
        for (title, body) in self.pairs {
            let title = content.text(title).unwrap_or_default();
            let body = content.text(body).unwrap_or_default();
            if !title.is_empty() || !body.is_empty() {
                items.push(ListItem::new(title, body));
            }
        }
        items
    }
}

/// Text of a field, empty when the key is unset or missing.
fn text(content: &PageContent, key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        content.text(key).unwrap_or_default()
    }
}

pub fn section(config: &Config, spec: &SectionSpec, content: &PageContent) -> Markup {
    let title = spec.title(content);
    let subtitle = content.text_of(spec.subtitle).unwrap_or_default();
    let body = text(content, spec.body);
    let picture = text(content, spec.image);
    let items = spec.items(content);
    let embed = text(content, spec.embed);
    let footer = text(content, spec.footer);
    let button = spec.button.and_then(|(label, href)| {
        let label = content.text(label)?;
        Some((label, content.text(href).unwrap_or_else(|| "#demo".to_string())))
    });

    let empty = title.is_empty()
        && subtitle.is_empty()
        && body.is_empty()
        && items.is_empty()
        && embed.is_empty();
    if empty {
        return html! {};
    }

    html! {
        section class=(spec.class) {
            div.wrap {
                div class=[(!picture.is_empty()).then_some("hero")] {
                    div {
                        @if !title.is_empty() {
                            (heading(2, &title))
                        }
                        @if !subtitle.is_empty() {
                            p.subtitle { (subtitle) }
                        }
                        @if !body.is_empty() {
                            div.body { (rich(&body)) }
                        }
                        @if let Some((label, href)) = &button {
                            a.button href=(href) { (label) }
                        }
                    }
                    @if !picture.is_empty() {
                        div { (image(config, &picture, &title.joined())) }
                    }
                }
                (item_cards(&items))
                @if !embed.is_empty() {
                    iframe.map src=(embed) loading="lazy" width="100%" height="360" {}
                }
                @if !footer.is_empty() {
                    p.section-footer { (footer) }
                }
            }
        }
    }
}

/// Every section of `specs` in order.
pub fn sections(config: &Config, specs: &[SectionSpec], content: &PageContent) -> Markup {
    html! {
        @for spec in specs {
            (section(config, spec, content))
        }
    }
}

pub const ABOUT: &[SectionSpec] = &[SectionSpec {
    class: "about",
    title: "aboutus_title",
    default_title: "About Us",
    body: "aboutus_description",
    image: "aboutus_image",
    ..SectionSpec::EMPTY
}];

pub const CORPORATE: &[SectionSpec] = &[
    SectionSpec {
        class: "hero",
        title: "hero_title",
        default_title: "Corporate Training",
        subtitle: &["hero_subheading"],
        image: "hero_image",
        button: Some(("hero_button_text", "hero_button_link")),
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "empower alt",
        title: "empower_title",
        body: "empower_description",
        image: "empower_image",
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "portfolio",
        title: "portfolio_title",
        subtitle: &["portfolio_subtitle"],
        items: &["portfolio_items"],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "advantages alt",
        title: "advantages_title",
        subtitle: &["advantages_subtitle"],
        items: &["advantages_left_items", "advantages_right_items"],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "hr-guide",
        title: "hr_guide_title",
        subtitle: &["hr_guide_subtitle"],
        items: &["hr_guide_steps"],
        ..SectionSpec::EMPTY
    },
];

pub const ON_JOB_SUPPORT: &[SectionSpec] = &[
    SectionSpec {
        class: "hero",
        title: "hero_title",
        default_title: "On-Job Support",
        body: "hero_description",
        image: "hero_image",
        button: Some(("hero_button_text", "hero_button_link")),
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "realtime alt",
        title: "realtime_title",
        subtitle: &["realtime_subheading"],
        body: "realtime_description",
        image: "realtime_image",
        pairs: &[
            ("realtime_subsection_title1", "subsection_title1_description"),
            ("realtime_subsection_title2", "subsection_title2_description"),
        ],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "who",
        title: "who_title",
        subtitle: &["who_subtitle"],
        items: &["who_cards"],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "how alt",
        title: "how_title",
        subtitle: &["how_subtitle"],
        items: &["how_points"],
        footer: "how_footer",
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "process",
        title: "process_title",
        subtitle: &["process_subtitle"],
        items: &["process_points"],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "why alt",
        title: "why_title",
        image: "why_image",
        items: &["why_points"],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "ready",
        title: "ready_title",
        body: "ready_description",
        image: "ready_image",
        button: Some(("ready_button", "ready_button_link")),
        ..SectionSpec::EMPTY
    },
];

pub const CONTACT: &[SectionSpec] = &[
    SectionSpec {
        class: "hero",
        title: "hero_title",
        default_title: "Contact Us",
        body: "hero_description",
        image: "hero_image",
        button: Some(("hero_button", "hero_button_link")),
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "contact-info alt",
        title: "contactus_title",
        subtitle: &["contactus_subtitle"],
        pairs: &[
            ("contacts_email_label", "contacts_email_id"),
            ("contacts_phone_label", "contacts_phone_number"),
            ("contactus_location1_label", "contactus_location1_address"),
            ("contactus_location2_label", "contactus_location2_address"),
        ],
        ..SectionSpec::EMPTY
    },
    SectionSpec {
        class: "map",
        title: "map_title",
        subtitle: &["map_subtitle"],
        embed: "map_link",
        ..SectionSpec::EMPTY
    },
];

/// Heading and bullet points above a page's demo form.
pub const DEMO: SectionSpec = SectionSpec {
    class: "demo alt",
    title: "demo_title",
    default_title: "Book Your Free Demo",
    subtitle: &["demo_subtitle", "demo_content"],
    items: &["demo_points"],
    ..SectionSpec::EMPTY
};

// src/models/chrome.rs

//! Header and footer settings shared by every page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A navigation link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(default)]
    pub new_tab: bool,
}

impl MenuLink {
    pub fn new(text: &str, slug: &str) -> Self {
        Self {
            text: text.to_string(),
            slug: slug.to_string(),
            new_tab: false,
        }
    }

    /// Whether this link is the current page. `/` only matches exactly.
    pub fn is_active(&self, path: &str) -> bool {
        if self.slug == "/" {
            path == "/"
        } else {
            path.starts_with(&self.slug)
        }
    }
}

fn links(pairs: &[(&str, &str)]) -> Vec<MenuLink> {
    pairs.iter().map(|(text, slug)| MenuLink::new(text, slug)).collect()
}

/// `GET /header-settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderSettings {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub menu_items: Vec<MenuLink>,
}

impl HeaderSettings {
    /// Menu to render; the built-in navigation when the CMS sent none.
    pub fn menu(&self) -> Vec<MenuLink> {
        if self.menu_items.is_empty() {
            default_menu()
        } else {
            self.menu_items.clone()
        }
    }

    pub fn logo_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.logo.as_deref().unwrap_or(fallback)
    }
}

pub fn default_menu() -> Vec<MenuLink> {
    links(&[
        ("Home", "/"),
        ("Courses", "/courses"),
        ("Corporate Training", "/corporate-training"),
        ("On Job Support", "/on-job-support"),
        ("About Us", "/about-us"),
        ("Blog", "/blog"),
        ("Contact Us", "/contact-us"),
    ])
}

/// Contact block of the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub locations: Vec<String>,
}

/// `GET /footer-settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSettings {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub get_in_touch: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email_placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub explore: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub explore_links: Vec<MenuLink>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub support: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub support_links: Vec<MenuLink>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub contact: Option<String>,
    #[serde(default)]
    pub contact_details: Option<ContactDetails>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub follow_us: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub social_media_icons: Vec<String>,
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub copyright: Option<String>,
}

const SOCIAL_PLATFORMS: [&str; 5] = ["whatsapp", "instagram", "twitter", "youtube", "facebook"];

impl FooterSettings {
    pub fn get_in_touch(&self) -> &str {
        self.get_in_touch.as_deref().unwrap_or("Get in touch with us:")
    }

    pub fn email_placeholder(&self) -> &str {
        self.email_placeholder.as_deref().unwrap_or("Enter your email")
    }

    pub fn about(&self) -> &str {
        self.about.as_deref().unwrap_or(
            "A professional training institute offering expert-led courses to help learners grow in their careers.",
        )
    }

    pub fn explore(&self) -> &str {
        self.explore.as_deref().unwrap_or("Explore")
    }

    pub fn explore_links(&self) -> Vec<MenuLink> {
        if self.explore_links.is_empty() {
            links(&[
                ("All courses", "/courses"),
                ("About", "/about-us"),
                ("Contact", "/contact-us"),
                ("Blog", "/blog"),
            ])
        } else {
            self.explore_links.clone()
        }
    }

    pub fn support(&self) -> &str {
        self.support.as_deref().unwrap_or("Support")
    }

    pub fn support_links(&self) -> Vec<MenuLink> {
        if self.support_links.is_empty() {
            links(&[
                ("Job support", "/on-job-support"),
                ("Corporate training", "/corporate-training"),
                ("Terms & Conditions", "/terms"),
            ])
        } else {
            self.support_links.clone()
        }
    }

    pub fn contact(&self) -> &str {
        self.contact.as_deref().unwrap_or("Contact")
    }

    pub fn contact_details(&self) -> ContactDetails {
        self.contact_details.clone().unwrap_or_default()
    }

    pub fn follow_us(&self) -> &str {
        self.follow_us.as_deref().unwrap_or("Follow us on social media:")
    }

    /// `(platform, href)` pairs; unknown links point at `#`.
    pub fn social(&self) -> Vec<(String, String)> {
        let platforms: Vec<String> = if self.social_media_icons.is_empty() {
            SOCIAL_PLATFORMS.iter().map(|p| p.to_string()).collect()
        } else {
            self.social_media_icons.clone()
        };
        platforms
            .into_iter()
            .map(|platform| {
                let href = self
                    .social_links
                    .get(&platform)
                    .filter(|h| !h.is_empty())
                    .cloned()
                    .unwrap_or_else(|| "#".to_string());
                (platform, href)
            })
            .collect()
    }

    pub fn copyright(&self, site_name: &str) -> String {
        self.copyright
            .clone()
            .unwrap_or_else(|| format!("{site_name} © - All Rights Reserved"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_header_default_menu() {
        let header: HeaderSettings = serde_json::from_value(json!({"menu_items": null})).unwrap();
        let menu = header.menu();
        assert_eq!(menu.len(), 7);
        assert_eq!(menu[0].slug, "/");
        assert_eq!(header.logo_or("/logo.png"), "/logo.png");
    }

    #[test]
    fn test_menu_link_active() {
        assert!(MenuLink::new("Home", "/").is_active("/"));
        assert!(!MenuLink::new("Home", "/").is_active("/blog"));
        assert!(MenuLink::new("Blog", "/blog").is_active("/blog/rust-intro"));
    }

    #[test]
    fn test_footer_social_defaults() {
        let footer: FooterSettings = serde_json::from_value(json!({
            "social_links": {"youtube": "https://youtube.com/x"}
        }))
        .unwrap();
        let social = footer.social();
        assert_eq!(social.len(), 5);
        assert!(social.contains(&("youtube".to_string(), "https://youtube.com/x".to_string())));
        assert!(social.contains(&("facebook".to_string(), "#".to_string())));
        assert_eq!(footer.explore_links().len(), 4);
    }
}

//! Blog listing and blog post pages.

use maud::{Markup, html};

use crate::catalog::{BlogQuery, CategoryChoice, CategorySelection};
use crate::models::{Config, TitleParts};
use crate::pages::{BlogListView, BlogPostView, Chrome, PageKey};
use crate::render::components::{blog_card, failure, heading, image, pager, query_url, rich};
use crate::render::form::demo_form;
use crate::render::layout::page;
use crate::render::sections::{DEMO, section};

fn list_url(query: &BlogQuery, categories: &CategorySelection, page: usize) -> String {
    let page = if page > 1 { page.to_string() } else { String::new() };
    query_url(
        "/blog",
        &[
            ("search", query.search.clone()),
            ("categories", categories.to_param().unwrap_or_default()),
            ("page", page),
        ],
    )
}

fn blog_search(view: &BlogListView) -> Markup {
    html! {
        form.blog-search action="/blog" method="get" {
            input type="search" name="search" value=(view.query.search)
                placeholder="Search articles" list="blog-titles" autocomplete="off";
            @if let Some(cats) = view.query.categories.to_param() {
                input type="hidden" name="categories" value=(cats);
            }
            datalist #blog-titles {
                @for title in &view.suggestions {
                    option value=(title) {}
                }
            }
            button type="submit" { "Search" }
        }
    }
}

fn categories(view: &BlogListView) -> Markup {
    let current = &view.query.categories;
    html! {
        aside.sidebar {
            h3 { (view.sidebar_name()) }
            a class=[current.is_all().then_some("checked")] href=(list_url(&view.query, &CategorySelection::all(), 1)) {
                "All"
            }
            @for category in &view.categories {
                @let choice = CategoryChoice::Id(category.id);
                a class=[current.is_checked(choice).then_some("checked")]
                    href=(list_url(&view.query, &current.select(choice, false), 1)) {
                    (category.name)
                }
            }
        }
    }
}

pub fn blog_list(config: &Config, chrome: &Chrome, view: &BlogListView) -> Markup {
    let content = view.content.clone().unwrap_or_default();
    let body = html! {
        section.blog-hero.alt {
            div.wrap {
                @match &view.content {
                    Some(content) => {
                        (heading(1, &content.title_parts("hero_title").or(TitleParts::new("Our", "Blog"))))
                        @if let Some(desc) = content.text("hero_description") {
                            p.subtitle { (desc) }
                        }
                    }
                    None => {
                        h1 { "Our " span.hl { "Blog" } }
                        (failure("Failed to load Blog Page content."))
                    }
                }
                (blog_search(view))
            }
        }
        section {
            div.wrap.catalog {
                (categories(view))
                div {
                    @if view.posts.is_empty() {
                        p.empty { "No blogs found." }
                    } @else {
                        p.result-count {
                            "Showing " (view.window.start()) "–" (view.window.end())
                            " of " (view.window.total_items)
                        }
                        div.blog-grid {
                            @for post in view.visible_posts() {
                                (blog_card(config, post))
                            }
                        }
                        (pager(&view.window, |n| list_url(&view.query, &view.query.categories, n)))
                    }
                }
            }
        }
        (section(config, &DEMO, &content))
        section.demo #demo {
            div.wrap { (demo_form(&view.demo)) }
        }
    };
    page(config, chrome, &view.meta, PageKey::Blog.path(), body)
}

pub fn blog_post(config: &Config, chrome: &Chrome, view: &BlogPostView) -> Markup {
    let path = PageKey::Blog.path();
    let Some(post) = &view.post else {
        let body = html! {
            section.not-found {
                div.wrap {
                    h1 { "Blog Not Found" }
                    p { "The article you are looking for does not exist." }
                    a.button href=(path) { "Back to Blog" }
                }
            }
        };
        return page(config, chrome, &view.meta, path, body);
    };

    let body = html! {
        article.post {
            div.wrap {
                a.back href=(path) { "‹ All articles" }
                h1 { (post.title) }
                @let date = post.display_date();
                @if !date.is_empty() {
                    time { (date) }
                }
                (image(config, &post.banner_image, &post.title))
                div.post-content { (rich(&post.content)) }
            }
        }
        @if !view.recent.is_empty() {
            section.recent-blogs.alt {
                div.wrap {
                    (heading(2, &TitleParts::new("Recent", "Blogs")))
                    div.blog-grid {
                        @for recent in &view.recent {
                            (blog_card(config, recent))
                        }
                    }
                }
            }
        }
        section.demo #demo {
            div.wrap { (demo_form(&view.demo)) }
        }
    };
    page(config, chrome, &view.meta, path, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PageWindow;
    use crate::models::{BlogPost, Category, PageMeta};
    use crate::pages::DemoForm;

    fn list_view(posts: usize, page: usize) -> BlogListView {
        let posts: Vec<BlogPost> = (1..=posts as u64)
            .map(|id| BlogPost {
                id,
                title: format!("Post {id}"),
                slug: format!("post-{id}"),
                ..BlogPost::default()
            })
            .collect();
        BlogListView {
            meta: PageMeta::fallback("Blog", "", &[]),
            content: None,
            categories: vec![Category::new(4, "Cloud")],
            query: BlogQuery {
                categories: CategorySelection::all(),
                search: "post".into(),
            },
            window: PageWindow::from_number(posts.len(), 9, page),
            posts,
            suggestions: vec!["Post 1".into()],
            demo: DemoForm::default(),
        }
    }

    #[test]
    fn test_blog_list_pages() {
        let html = blog_list(&Config::default(), &Chrome::default(), &list_view(12, 2))
            .into_string();
        assert!(html.contains("Showing 10–12 of 12"));
        assert!(html.contains(r#"href="/blog/post-12""#));
        assert!(!html.contains(r#"href="/blog/post-9""#));
        assert!(html.contains(r#"href="/blog?search=post""#));
        assert!(html.contains(r#"<option value="Post 1">"#));
        assert!(html.contains("Failed to load Blog Page content."));
        assert!(html.contains(r#"href="/blog?search=post&amp;categories=4""#));
    }

    #[test]
    fn test_empty_blog_list() {
        let html = blog_list(&Config::default(), &Chrome::default(), &list_view(0, 1))
            .into_string();
        assert!(html.contains("No blogs found."));
    }

    #[test]
    fn test_blog_not_found() {
        let view = BlogPostView {
            meta: PageMeta::fallback("Blog Not Found", "", &[]),
            post: None,
            recent: Vec::new(),
            demo: DemoForm::default(),
        };
        let html = blog_post(&Config::default(), &Chrome::default(), &view).into_string();
        assert!(html.contains("<h1>Blog Not Found</h1>"));
    }

    #[test]
    fn test_blog_post_content_is_raw_html() {
        let view = BlogPostView {
            meta: PageMeta::fallback("Rust", "", &[]),
            post: Some(BlogPost {
                id: 1,
                title: "Rust".into(),
                content: "<p>Hello <em>world</em></p>".into(),
                ..BlogPost::default()
            }),
            recent: Vec::new(),
            demo: DemoForm::default(),
        };
        let html = blog_post(&Config::default(), &Chrome::default(), &view).into_string();
        assert!(html.contains("<p>Hello <em>world</em></p>"));
    }
}

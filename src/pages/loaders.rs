//! Per-route loaders and their view models.

use crate::api::{Cms, PageEndpoint};
use crate::catalog::{
    BlogQuery, CategorySelection, CourseGrid, CourseGroup, GridFilter, PageWindow, build_grid,
    courses_with_status,
};
use crate::models::{
    BlogPost, Category, Config, Course, FormDetails, ListItem, PageContent, PageMeta, SeoRecord,
};
use crate::pages::meta::{blog_meta, course_meta, not_found_meta, page_meta};
use crate::pages::{PageKey, or_fallback, or_none};
use crate::search::SuggestionRanker;

/// Home page tabs used when the CMS sends none.
const DEFAULT_TABS: [&str; 3] = ["Trending", "Popular", "Free"];

/// Data behind the shared demo-booking form.
#[derive(Debug, Clone, Default)]
pub struct DemoForm {
    pub details: FormDetails,
    pub courses: Vec<Course>,
    /// `page` value sent with the enrollment
    pub source: &'static str,
}

async fn load_demo_form(cms: &Cms, source: &'static str) -> DemoForm {
    let (details, courses) = futures::join!(
        or_fallback("form details", cms.form_details(), FormDetails::default()),
        or_fallback("courses", cms.courses(), Vec::new()),
    );
    DemoForm {
        details,
        courses,
        source,
    }
}

async fn load_page_meta(cms: &Cms, config: &Config, key: PageKey) -> PageMeta {
    let record = or_fallback(
        "SEO metadata",
        cms.seo(key.seo_id(&config.seo)),
        SeoRecord::default(),
    )
    .await;
    page_meta(key, &record, config)
}

/// Query parameters of `/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeParams {
    /// Course tab (`status`)
    pub status: Option<String>,
    /// 1-based carousel page (`slide`)
    pub slide: usize,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub meta: PageMeta,
    pub content: PageContent,
    pub tabs: Vec<String>,
    pub active_tab: String,
    /// Courses of the active tab
    pub tab_courses: Vec<Course>,
    pub window: PageWindow,
    pub recent_blogs: Vec<BlogPost>,
}

impl HomeView {
    /// Cards on the current carousel page.
    pub fn visible_courses(&self) -> &[Course] {
        self.window.slice(&self.tab_courses)
    }
}

pub async fn load_home(cms: &Cms, config: &Config, params: &HomeParams) -> HomeView {
    let (meta, content, courses, recent_blogs) = futures::join!(
        load_page_meta(cms, config, PageKey::Home),
        or_fallback(
            "home page content",
            cms.page(PageEndpoint::Homepage),
            PageContent::default()
        ),
        or_fallback("courses", cms.courses(), Vec::new()),
        or_fallback(
            "recent blogs",
            cms.recent_blogs(config.listing.recent_blogs),
            Vec::new()
        ),
    );

    let mut tabs = content.strings("explore_tabs");
    if tabs.is_empty() {
        tabs = DEFAULT_TABS.iter().map(|t| t.to_string()).collect();
    }
    let active_tab = params
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| tabs[0].to_lowercase());

    let tab_courses: Vec<Course> = courses_with_status(&courses, &active_tab)
        .into_iter()
        .cloned()
        .collect();
    let window = PageWindow::from_number(
        tab_courses.len(),
        config.listing.course_page_size,
        params.slide,
    );

    HomeView {
        meta,
        content,
        tabs,
        active_tab,
        tab_courses,
        window,
        recent_blogs,
    }
}

/// Query parameters of `/courses`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursesParams {
    pub search: String,
    pub category: String,
    /// Comma separated category ids
    pub cats: String,
    pub view: Option<String>,
    /// Category whose row carousel is paged
    pub row: Option<u64>,
    /// 1-based page of that row
    pub slide: usize,
}

impl CoursesParams {
    pub fn filter(&self) -> GridFilter {
        GridFilter {
            search: self.search.trim().to_string(),
            url_category: self.category.trim().to_string(),
            view_all: self
                .view
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            selection: CategorySelection::from_param(&self.cats),
        }
    }
}

/// One category row of the grid with its carousel position.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPage {
    pub group: CourseGroup,
    pub window: PageWindow,
}

impl RowPage {
    pub fn visible_courses(&self) -> &[Course] {
        self.window.slice(&self.group.courses)
    }
}

#[derive(Debug, Clone)]
pub struct CoursesView {
    pub meta: PageMeta,
    pub content: PageContent,
    pub categories: Vec<Category>,
    pub filter: GridFilter,
    pub grid: CourseGrid,
    pub rows: Vec<RowPage>,
}

pub async fn load_courses(cms: &Cms, config: &Config, params: &CoursesParams) -> CoursesView {
    let (meta, content, categories, courses) = futures::join!(
        load_page_meta(cms, config, PageKey::Courses),
        or_fallback(
            "course page content",
            cms.page(PageEndpoint::CoursePage),
            PageContent::default()
        ),
        or_fallback("categories", cms.categories(), Vec::new()),
        or_fallback("courses", cms.courses(), Vec::new()),
    );

    let filter = params.filter();
    let grid = build_grid(&categories, &courses, &filter);

    // A category opened with "view all" shows every course at once.
    let rows = grid
        .groups
        .iter()
        .map(|group| {
            let per_page = if filter.view_all.is_some() {
                group.courses.len()
            } else {
                config.listing.course_page_size
            };
            let slide = match params.row {
                Some(id) if id == group.category.id => params.slide,
                _ => 1,
            };
            RowPage {
                group: group.clone(),
                window: PageWindow::from_number(group.courses.len(), per_page, slide),
            }
        })
        .collect();

    CoursesView {
        meta,
        content,
        categories,
        filter,
        grid,
        rows,
    }
}

#[derive(Debug, Clone)]
pub struct CourseDetailView {
    pub meta: PageMeta,
    /// `None` when the course is missing or could not be fetched
    pub course: Option<Course>,
    pub job_assistance: PageContent,
    pub faqs: Vec<ListItem>,
    pub placements: PageContent,
    pub demo: DemoForm,
}

pub async fn load_course_detail(cms: &Cms, config: &Config, id: u64) -> CourseDetailView {
    let (course, job_assistance, faqs, placements, demo) = futures::join!(
        or_none("course", cms.course(id)),
        or_fallback(
            "job assistance",
            cms.page(PageEndpoint::JobAssistance),
            PageContent::default()
        ),
        or_fallback("FAQs", cms.faqs(PageEndpoint::Faqs), Vec::new()),
        or_fallback(
            "placements",
            cms.page(PageEndpoint::PlacementsReserve),
            PageContent::default()
        ),
        load_demo_form(cms, "course-details"),
    );

    let meta = match &course {
        Some(course) => course_meta(course, config),
        None => not_found_meta("Course", config),
    };

    CourseDetailView {
        meta,
        course,
        job_assistance,
        faqs,
        placements,
        demo,
    }
}

/// Query parameters of `/blog`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogListParams {
    pub search: String,
    /// Comma separated category ids
    pub categories: String,
    /// 1-based page
    pub page: usize,
}

impl BlogListParams {
    pub fn query(&self) -> BlogQuery {
        BlogQuery {
            categories: CategorySelection::from_param(&self.categories),
            search: self.search.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlogListView {
    pub meta: PageMeta,
    /// `None` when the blog page content failed to load
    pub content: Option<PageContent>,
    pub categories: Vec<Category>,
    pub query: BlogQuery,
    /// Every post passing the filters
    pub posts: Vec<BlogPost>,
    pub window: PageWindow,
    /// Post titles ranked against the search
    pub suggestions: Vec<String>,
    pub demo: DemoForm,
}

impl BlogListView {
    pub fn visible_posts(&self) -> &[BlogPost] {
        self.window.slice(&self.posts)
    }

    pub fn sidebar_name(&self) -> String {
        self.content
            .as_ref()
            .and_then(|c| c.text("sidebar_name"))
            .unwrap_or_else(|| "Categories".to_string())
    }
}

pub async fn load_blog_list(cms: &Cms, config: &Config, params: &BlogListParams) -> BlogListView {
    let query = params.query();
    let (meta, content, categories, posts, demo) = futures::join!(
        load_page_meta(cms, config, PageKey::Blog),
        or_none("blog page content", cms.page(PageEndpoint::BlogPage)),
        or_fallback("blog categories", cms.blog_categories(), Vec::new()),
        or_fallback("blogs", cms.blogs(&query), Vec::new()),
        load_demo_form(cms, PageKey::Blog.form_source()),
    );

    let posts = query.filter(posts);
    let window = PageWindow::from_number(posts.len(), config.listing.blog_page_size, params.page);

    let suggestions = if query.search.is_empty() {
        Vec::new()
    } else {
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        SuggestionRanker::blog_titles(&config.listing).rank(&titles, &query.search)
    };

    BlogListView {
        meta,
        content,
        categories,
        query,
        posts,
        window,
        suggestions,
        demo,
    }
}

#[derive(Debug, Clone)]
pub struct BlogPostView {
    pub meta: PageMeta,
    /// `None` when the post is missing or could not be fetched
    pub post: Option<BlogPost>,
    /// Recent posts other than this one
    pub recent: Vec<BlogPost>,
    pub demo: DemoForm,
}

pub async fn load_blog_post(cms: &Cms, config: &Config, slug: &str) -> BlogPostView {
    let limit = config.listing.recent_blogs;
    let (post, recent, demo) = futures::join!(
        or_none("blog post", cms.blog(slug)),
        or_fallback("recent blogs", cms.recent_blogs(limit + 1), Vec::new()),
        load_demo_form(cms, PageKey::Blog.form_source()),
    );

    let mut recent: Vec<BlogPost> = recent
        .into_iter()
        .filter(|p| p.slug != slug && p.id.to_string() != slug)
        .collect();
    recent.truncate(limit);

    let meta = match &post {
        Some(post) => blog_meta(post, config),
        None => not_found_meta("Blog", config),
    };

    BlogPostView {
        meta,
        post,
        recent,
        demo,
    }
}

/// A CMS-driven marketing page (about, corporate training, on-job
/// support, contact, terms).
#[derive(Debug, Clone)]
pub struct ContentView {
    pub key: PageKey,
    pub meta: PageMeta,
    /// `None` when the content failed to load
    pub content: Option<PageContent>,
    /// HR FAQs, on the corporate training page only
    pub faqs: Vec<ListItem>,
    pub demo: DemoForm,
}

impl ContentView {
    /// Notice shown in place of the sections when the content failed.
    pub fn failure_message(&self) -> &'static str {
        match self.key {
            PageKey::About => "Failed to load About Us page content.",
            PageKey::CorporateTraining => "Failed to load Corporate Training Page content.",
            PageKey::OnJobSupport => "Failed to load On-Job-Support content.",
            PageKey::Contact => "Failed to load Contact Us page content.",
            PageKey::Terms => "Unable to load terms and conditions.",
            PageKey::Blog => "Failed to load Blog Page content.",
            PageKey::Home | PageKey::Courses => "Failed to load page content.",
        }
    }
}

pub async fn load_content_page(cms: &Cms, config: &Config, key: PageKey) -> ContentView {
    let faqs = async {
        if key == PageKey::CorporateTraining {
            or_fallback("HR FAQs", cms.faqs(PageEndpoint::HrFaqs), Vec::new()).await
        } else {
            Vec::new()
        }
    };
    let (meta, content, faqs, demo) = futures::join!(
        load_page_meta(cms, config, key),
        or_none(key.label(), cms.page(key.endpoint())),
        faqs,
        load_demo_form(cms, key.form_source()),
    );

    ContentView {
        key,
        meta,
        content,
        faqs,
        demo,
    }
}

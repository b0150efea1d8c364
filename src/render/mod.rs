//! HTML rendering with maud.
//!
//! Every page is a pure function of its view model, wrapped in the shared
//! layout by [`layout::page`].

mod blog;
mod catalog;
pub mod components;
mod content;
mod form;
mod home;
pub mod layout;
mod scripts;
pub mod sections;

pub use blog::{blog_list, blog_post};
pub use catalog::{course_detail, courses};
pub use content::{content_page, not_found};
pub use form::demo_form;
pub use home::home;

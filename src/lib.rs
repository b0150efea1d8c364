// src/lib.rs

//! Course catalog and marketing site rendered on the server from a CMS API.

pub mod api;
pub mod catalog;
pub mod enroll;
pub mod error;
pub mod models;
pub mod pages;
pub mod render;
pub mod search;
pub mod server;

//! Course and blog listing logic: category selection, grid filtering,
//! pagination.

mod blog;
mod grid;
mod paginate;
mod selection;

pub use blog::BlogQuery;
pub use grid::{CourseGrid, CourseGroup, GridFilter, build_grid, courses_with_status};
pub use paginate::{PageWindow, page_count, paginate};
pub use selection::{CategoryChoice, CategorySelection};

//! Project catalog and detail queries.

mod project_rows;

mod list_projects;
pub use list_projects::list_projects;

mod get_project_detail;
pub use get_project_detail::get_project_detail;

pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod catalog_components;
pub mod form_components;

//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod facet;
pub mod selection;
pub mod project;
pub mod catalog_filter;
pub mod facet_panel;
pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod forms;
pub mod session;
pub mod backend_error;

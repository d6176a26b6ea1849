//! API functions called by the server functions of the web app.

pub mod projects;
pub mod facet_options;
pub mod auth;
pub mod profile;
pub mod applications;

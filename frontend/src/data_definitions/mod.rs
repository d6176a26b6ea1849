pub mod url_param;
pub mod browser;
pub mod session_context;

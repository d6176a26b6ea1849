//! Server functions called by the pages.

pub mod catalog_api;
pub mod auth_api;
pub mod profile_api;

use dioxus::prelude::*;

#[cfg(feature = "server")]
use common::backend_error::{AuthErrorReason, BackendError};

pub const NOT_SIGNED_IN_CODE: u16 = 401;
pub const NOT_FOUND_CODE: u16 = 404;

#[cfg(feature = "server")]
pub(crate) fn to_server_error(error: BackendError) -> ServerFnError {
    dioxus::logger::tracing::warn!("backend call failed: {error}");
    let code = match &error {
        BackendError::Auth(AuthErrorReason::NotSignedIn) => NOT_SIGNED_IN_CODE,
        BackendError::Auth(_) => 400,
        BackendError::NotFound(_) => NOT_FOUND_CODE,
        _ => 500,
    };
    ServerFnError::ServerError { message: error.detail(), code, details: None }
}

/// Text to show the user for a failed server call.
pub fn error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

pub fn error_code(error: &ServerFnError) -> Option<u16> {
    match error {
        ServerFnError::ServerError { code, .. } => Some(*code),
        _ => None,
    }
}

//! Server-side access to the hosted backend service.

pub mod api;
pub mod db_utils;

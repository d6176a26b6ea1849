//! Access to the hosted backend service.

pub mod row_query;
pub mod service;
pub mod error_body;
pub mod supabase_config;
pub mod supabase_client;
pub mod supabase_utils;

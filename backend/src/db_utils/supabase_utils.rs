use common::backend_error::BackendError;

use crate::db_utils::{supabase_client::SupabaseClient, supabase_config::BackendConfig};

pub fn get_supabase_client() -> Result<SupabaseClient, BackendError> {
    let config = BackendConfig::from_env().map_err(|e| BackendError::Config(format!("{e:#}")))?;
    Ok(SupabaseClient::new(config))
}

/// Client acting with the caller's access token, or anonymously when it is empty.
pub fn get_user_supabase_client(access_token: String) -> Result<SupabaseClient, BackendError> {
    Ok(get_supabase_client()?.with_access_token(Some(access_token)))
}

//! Client API calls that write on behalf of the signed-in user.

use common::forms::ProfileForm;
use dioxus::prelude::*;

#[cfg(feature = "server")]
use super::to_server_error;

#[server]
pub async fn submit_profile(access_token: String, form: ProfileForm) -> Result<(), ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_user_supabase_client(access_token).map_err(to_server_error)?;
    let user = backend::api::auth::require_user(&client).await.map_err(to_server_error)?;
    backend::api::profile::submit_profile(&client, &user.id, &form).await.map_err(to_server_error)
}

#[server]
pub async fn apply_to_project(access_token: String, project_id: String) -> Result<(), ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_user_supabase_client(access_token).map_err(to_server_error)?;
    backend::api::applications::apply_to_project(&client, &project_id).await.map_err(to_server_error)
}

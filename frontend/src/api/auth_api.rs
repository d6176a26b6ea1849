//! Client API calls for signup, login and session checks.

use common::{forms::Credentials, session::{Session, User}};
use dioxus::prelude::*;

#[cfg(feature = "server")]
use super::to_server_error;

#[server]
pub async fn sign_up(credentials: Credentials) -> Result<(), ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_supabase_client().map_err(to_server_error)?;
    backend::api::auth::sign_up(&client, credentials).await.map_err(to_server_error)
}

#[server]
pub async fn sign_in(credentials: Credentials) -> Result<Session, ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_supabase_client().map_err(to_server_error)?;
    backend::api::auth::sign_in(&client, credentials).await.map_err(to_server_error)
}

#[server]
pub async fn sign_out(access_token: String) -> Result<(), ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_user_supabase_client(access_token).map_err(to_server_error)?;
    backend::api::auth::sign_out(&client).await;
    Ok(())
}

/// The user behind `access_token`, or `None` once the token stopped being valid.
#[server]
pub async fn current_user(access_token: String) -> Result<Option<User>, ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_user_supabase_client(access_token).map_err(to_server_error)?;
    backend::api::auth::current_user(&client).await.map_err(to_server_error)
}

//! Client API calls for the project catalog.

use common::{facet::Facet, project::{Project, ProjectDetail}};
use dioxus::prelude::*;

#[cfg(feature = "server")]
use super::to_server_error;

#[server]
pub async fn list_projects() -> Result<Vec<Project>, ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_supabase_client().map_err(to_server_error)?;
    backend::api::projects::list_projects(&client).await.map_err(to_server_error)
}

#[server]
pub async fn get_project_detail(project_id: String) -> Result<ProjectDetail, ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_supabase_client().map_err(to_server_error)?;
    backend::api::projects::get_project_detail(&client, &project_id).await.map_err(to_server_error)
}

/// All four facets. Option lists that fail to load come back empty.
#[server]
pub async fn load_facets() -> Result<Vec<Facet>, ServerFnError> {
    let client = backend::db_utils::supabase_utils::get_supabase_client().map_err(to_server_error)?;
    Ok(backend::api::facet_options::load_all_facets(&client).await)
}

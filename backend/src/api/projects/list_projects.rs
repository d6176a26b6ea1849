use common::{backend_error::BackendError, project::Project};
use tracing::info;

use crate::{
    api::projects::project_rows::{ProjectRow, PROJECT_TABLE, project_query},
    db_utils::service::{BackendService, decode_rows},
};

/// Every listed project, newest first. This is the unfiltered superset the catalog filters.
pub async fn list_projects(service: &impl BackendService) -> Result<Vec<Project>, BackendError> {
    let query = project_query(false).order_by("created_at", false);
    let rows = service.fetch_rows(&query).await?;
    let rows: Vec<ProjectRow> = decode_rows(PROJECT_TABLE, rows)?;
    info!("list_projects: {} projects", rows.len());
    Ok(rows.into_iter().map(ProjectRow::into_project).collect())
}

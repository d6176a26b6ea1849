use common::{backend_error::BackendError, project::ProjectDetail};

use crate::{
    api::projects::project_rows::{ProjectRow, PROJECT_TABLE, project_query},
    db_utils::service::{BackendService, decode_rows},
};

pub async fn get_project_detail(service: &impl BackendService, project_id: &str) -> Result<ProjectDetail, BackendError> {
    let query = project_query(true).eq("project_id", project_id);
    let rows = service.fetch_rows(&query).await?;
    let rows: Vec<ProjectRow> = decode_rows(PROJECT_TABLE, rows)?;
    rows.into_iter()
        .next()
        .map(ProjectRow::into_detail)
        .ok_or_else(|| BackendError::NotFound(format!("project {project_id}")))
}

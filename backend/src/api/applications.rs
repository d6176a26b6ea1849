//! Project applications.

use common::backend_error::BackendError;
use serde::Serialize;
use tracing::info;

use crate::{api::auth::require_user, db_utils::service::BackendService};

pub const APPLICATIONS_TABLE: &str = "applications";

#[derive(Debug, Serialize)]
struct ApplicationRecord<'a> {
    project_id: &'a str,
    user_id: &'a str,
}

/// Records that the signed-in user applied to `project_id`.
pub async fn apply_to_project(service: &impl BackendService, project_id: &str) -> Result<(), BackendError> {
    let user = require_user(service).await?;
    let record = ApplicationRecord { project_id, user_id: &user.id };
    let record = serde_json::to_value(record).map_err(|e| BackendError::Write(e.to_string()))?;
    service.insert_row(APPLICATIONS_TABLE, record).await?;
    info!("apply_to_project: {} applied to {project_id}", user.id);
    Ok(())
}

//! Profile submission.

use common::{backend_error::BackendError, forms::ProfileForm};
use tracing::info;

use crate::db_utils::service::BackendService;

pub const USERS_TABLE: &str = "users";

/// Writes `form` as the profile row of `user_id`.
pub async fn submit_profile(service: &impl BackendService, user_id: &str, form: &ProfileForm) -> Result<(), BackendError> {
    let record = serde_json::to_value(form.to_record(user_id)).map_err(|e| BackendError::Write(e.to_string()))?;
    service.insert_row(USERS_TABLE, serde_json::Value::Array(vec![record])).await?;
    info!("submit_profile: stored profile of {user_id}");
    Ok(())
}

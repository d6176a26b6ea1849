//! The contract the screens rely on from the hosted backend service.

use async_trait::async_trait;
use common::{
    backend_error::BackendError,
    session::{Session, User},
};
use serde::de::DeserializeOwned;

use crate::db_utils::row_query::RowQuery;

#[async_trait]
pub trait BackendService: Send + Sync {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<serde_json::Value>, BackendError>;

    async fn insert_row(&self, table: &str, record: serde_json::Value) -> Result<(), BackendError>;

    async fn sign_up(&self, email: &str, password: &str, metadata: Option<serde_json::Value>) -> Result<(), BackendError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Never fails; a rejected sign-out only leaves the token to expire.
    async fn sign_out(&self);

    /// `Ok(None)` when there is no session or the service rejects it.
    async fn get_current_user(&self) -> Result<Option<User>, BackendError>;
}

pub fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<serde_json::Value>) -> Result<Vec<T>, BackendError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| BackendError::Query(format!("unexpected row shape in {table}: {e}")))
        })
        .collect()
}

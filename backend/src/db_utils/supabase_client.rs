//! HTTP client for the hosted row store and auth endpoints.

use async_trait::async_trait;
use common::{
    backend_error::{AuthErrorReason, BackendError},
    session::{Session, User},
};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::json;
use tracing::{debug, warn};

use crate::db_utils::{
    error_body::ServiceErrorBody, row_query::RowQuery, service::BackendService, supabase_config::BackendConfig,
};

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: BackendConfig,
    access_token: Option<String>,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { http: reqwest::Client::new(), config, access_token: None }
    }

    /// A client acting as the signed-in user instead of the anonymous role.
    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token.filter(|token| !token.is_empty());
        self
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.config.anon_key);
        request.header("apikey", &self.config.anon_key).bearer_auth(bearer)
    }

    async fn auth_failure(response: Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let reason = ServiceErrorBody::parse(&body).auth_reason(status, &body);
        warn!("auth request failed: {status}: {reason}");
        BackendError::Auth(reason)
    }
}

#[async_trait]
impl BackendService for SupabaseClient {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<serde_json::Value>, BackendError> {
        let url = self.config.endpoint(&format!("rest/v1/{}", query.table));
        let pairs = query.query_pairs();
        debug!("fetch_rows: GET {url} {pairs:?}");
        let response = self
            .authorized(self.http.get(&url).query(&pairs))
            .send()
            .await
            .map_err(|e| BackendError::Query(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| BackendError::Query(e.to_string()))?;
        if !status.is_success() {
            let message = ServiceErrorBody::parse(&body).message(status, &body);
            warn!("fetch_rows {}: {status}: {message}", query.table);
            return Err(BackendError::Query(message));
        }
        serde_json::from_str(&body).map_err(|e| BackendError::Query(format!("invalid response from {}: {e}", query.table)))
    }

    async fn insert_row(&self, table: &str, record: serde_json::Value) -> Result<(), BackendError> {
        let url = self.config.endpoint(&format!("rest/v1/{table}"));
        debug!("insert_row: POST {url}");
        let response = self
            .authorized(self.http.post(&url).header("Prefer", "return=minimal").json(&record))
            .send()
            .await
            .map_err(|e| BackendError::Write(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        let message = ServiceErrorBody::parse(&body).message(status, &body);
        warn!("insert_row {table}: {status}: {message}");
        Err(BackendError::Write(message))
    }

    async fn sign_up(&self, email: &str, password: &str, metadata: Option<serde_json::Value>) -> Result<(), BackendError> {
        let url = self.config.endpoint("auth/v1/signup");
        let redirect_to = self.config.signup_redirect_url();
        debug!("sign_up: POST {url} redirect_to={redirect_to}");
        let mut body = json!({ "email": email, "password": password });
        if let Some(metadata) = metadata {
            body["data"] = metadata;
        }
        let response = self
            .authorized(self.http.post(&url).query(&[("redirect_to", redirect_to.as_str())]).json(&body))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }
        Ok(())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let url = self.config.endpoint("auth/v1/token");
        debug!("sign_in_with_password: POST {url}");
        let response = self
            .authorized(
                self.http
                    .post(&url)
                    .query(&[("grant_type", "password")])
                    .json(&json!({ "email": email, "password": password })),
            )
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }
        response
            .json::<Session>()
            .await
            .map_err(|e| BackendError::Auth(AuthErrorReason::Other(format!("invalid session response: {e}"))))
    }

    async fn sign_out(&self) {
        if self.access_token.is_none() {
            return;
        }
        let url = self.config.endpoint("auth/v1/logout");
        debug!("sign_out: POST {url}");
        match self.authorized(self.http.post(&url)).send().await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => warn!("sign_out rejected: {}", response.status()),
            Err(e) => warn!("sign_out failed: {e}"),
        }
    }

    async fn get_current_user(&self) -> Result<Option<User>, BackendError> {
        if self.access_token.is_none() {
            return Ok(None);
        }
        let url = self.config.endpoint("auth/v1/user");
        debug!("get_current_user: GET {url}");
        let response = self
            .authorized(self.http.get(&url))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        match response.status() {
            status if status.is_success() => response
                .json::<User>()
                .await
                .map(Some)
                .map_err(|e| BackendError::Auth(AuthErrorReason::Other(format!("invalid user response: {e}")))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => Err(Self::auth_failure(response).await),
        }
    }
}

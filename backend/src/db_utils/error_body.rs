//! Parsing of error bodies returned by the hosted service.

use common::backend_error::AuthErrorReason;
use reqwest::StatusCode;
use serde::Deserialize;

/// Union of the error shapes of the row and auth endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceErrorBody {
    pub code: Option<serde_json::Value>,
    pub error_code: Option<String>,
    pub msg: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub details: Option<String>,
}

impl ServiceErrorBody {
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn message(&self, status: StatusCode, raw_body: &str) -> String {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| {
                if raw_body.trim().is_empty() { status.to_string() } else { raw_body.trim().to_string() }
            })
    }

    /// Machine-readable code, preferring the auth `error_code` over the legacy `error` field.
    pub fn auth_code(&self) -> Option<String> {
        if self.error_code.is_some() {
            return self.error_code.clone();
        }
        if let Some(serde_json::Value::String(code)) = &self.code {
            return Some(code.clone());
        }
        self.error.clone()
    }

    pub fn auth_reason(&self, status: StatusCode, raw_body: &str) -> AuthErrorReason {
        AuthErrorReason::from_code(self.auth_code().as_deref(), &self.message(status, raw_body))
    }
}

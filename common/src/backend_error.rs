//! Errors returned by calls to the hosted backend service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthErrorReason {
    InvalidCredentials,
    EmailTaken,
    EmailNotConfirmed,
    NotSignedIn,
    Other(String),
}

impl std::fmt::Display for AuthErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "メールアドレスまたはパスワードが正しくありません"),
            Self::EmailTaken => write!(f, "このメールアドレスは既に登録されています"),
            Self::EmailNotConfirmed => write!(f, "メールアドレスの認証が完了していません"),
            Self::NotSignedIn => write!(f, "ログインしていません"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl AuthErrorReason {
    /// Maps a service error code (and its message, as fallback) to a reason.
    pub fn from_code(code: Option<&str>, message: &str) -> Self {
        match code {
            // the legacy grant error covers both wrong passwords and unconfirmed addresses
            Some("invalid_grant") if message.eq_ignore_ascii_case("Email not confirmed") => Self::EmailNotConfirmed,
            Some("invalid_credentials") | Some("invalid_grant") => Self::InvalidCredentials,
            Some("user_already_exists") | Some("email_exists") => Self::EmailTaken,
            Some("email_not_confirmed") => Self::EmailNotConfirmed,
            Some("no_authorization") | Some("bad_jwt") | Some("session_not_found") => Self::NotSignedIn,
            _ => Self::Other(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BackendError {
    #[error("{0}")]
    Auth(AuthErrorReason),

    #[error("query failed: {0}")]
    Query(String),

    #[error("write failed: {0}")]
    Write(String),

    #[error("option list could not be loaded: {0}")]
    Fetch(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The service's own wording, without the error kind.
    pub fn detail(&self) -> String {
        match self {
            Self::Auth(reason) => reason.to_string(),
            Self::Query(message)
            | Self::Write(message)
            | Self::Fetch(message)
            | Self::NotFound(message)
            | Self::Config(message)
            | Self::Transport(message) => message.clone(),
        }
    }
}

/// Joins a screen-specific prefix such as `ログインに失敗しました：` with the error text.
pub fn failure_message(prefix: &str, reason: impl std::fmt::Display) -> String {
    format!("{prefix}{reason}")
}

//! Signup, login and session lookups.

use common::{
    backend_error::{AuthErrorReason, BackendError},
    forms::Credentials,
    session::{Session, User},
};
use tracing::info;

use crate::db_utils::service::BackendService;

fn require_complete(credentials: &Credentials) -> Result<(), BackendError> {
    if credentials.is_complete() {
        return Ok(());
    }
    Err(BackendError::Auth(AuthErrorReason::Other("メールアドレスとパスワードを入力してください".to_string())))
}

pub async fn sign_up(service: &impl BackendService, credentials: Credentials) -> Result<(), BackendError> {
    require_complete(&credentials)?;
    service.sign_up(credentials.email.trim(), &credentials.password, None).await?;
    info!("sign_up: confirmation requested");
    Ok(())
}

pub async fn sign_in(service: &impl BackendService, credentials: Credentials) -> Result<Session, BackendError> {
    require_complete(&credentials)?;
    let session = service.sign_in_with_password(credentials.email.trim(), &credentials.password).await?;
    info!("sign_in: user {}", session.user_id());
    Ok(session)
}

pub async fn sign_out(service: &impl BackendService) {
    service.sign_out().await;
}

pub async fn current_user(service: &impl BackendService) -> Result<Option<User>, BackendError> {
    service.get_current_user().await
}

/// The current user, or `NotSignedIn` when the session is missing or rejected.
pub async fn require_user(service: &impl BackendService) -> Result<User, BackendError> {
    service.get_current_user().await?.ok_or(BackendError::Auth(AuthErrorReason::NotSignedIn))
}

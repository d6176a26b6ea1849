//! The signed-in session shared by every page.

use common::session::Session;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::auth_api::{current_user, sign_out};
use crate::data_definitions::browser::{load_session, store_session};

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: Signal<Option<Session>>,
}

impl SessionContext {
    pub fn new(session: Signal<Option<Session>>) -> Self {
        Self { session }
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.access_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn set_session(&mut self, session: Option<Session>) {
        store_session(session.as_ref());
        self.session.set(session);
    }

    /// Re-validates the stored token. A rejected token signs the user out,
    /// an unreachable backend keeps the stored session.
    pub async fn refresh(mut self) {
        let Some(stored) = self.session.peek().clone().or_else(load_session) else {
            return;
        };
        match current_user(stored.access_token.clone()).await {
            Ok(Some(user)) => self.set_session(Some(Session { user, ..stored })),
            Ok(None) => {
                info!("stored session expired");
                self.set_session(None);
            }
            Err(e) => {
                warn!("session check failed: {e}");
                self.session.set(Some(stored));
            }
        }
    }

    pub async fn sign_out(mut self) {
        let token = self.access_token();
        self.set_session(None);
        if let Some(token) = token {
            if let Err(e) = sign_out(token).await {
                warn!("sign out failed: {e}");
            }
        }
    }
}

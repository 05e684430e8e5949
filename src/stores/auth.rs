use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    client::ApiClient,
    dto::{
        auth::{LoginRequest, RegisterRequest},
        profile::ProfileUpdate,
    },
    error::AppResult,
    models::User,
    services::{auth_service, profile_service},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Default for AuthState {
    /// Loading until the first session check so the shell can hold off rendering.
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

/// Session identity of the current client.
#[derive(Debug, Clone)]
pub struct AuthStore {
    api: ApiClient,
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().user.as_ref().is_some_and(User::is_admin)
    }

    pub fn set_user(&self, user: Option<User>) {
        self.state.send_modify(|state| {
            state.is_authenticated = user.is_some();
            state.user = user;
        });
    }

    /// Never fails: any error means "not logged in".
    pub async fn check_auth(&self) {
        self.set_loading(true);
        let user = match auth_service::current_user(&self.api).await {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::debug!(error = %err, "session check failed");
                None
            }
        };
        self.settle(user);
    }

    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<User> {
        credentials.validate()?;
        self.set_loading(true);
        let result = async {
            auth_service::login(&self.api, credentials).await?;
            auth_service::current_user(&self.api).await
        }
        .await;
        self.finish_identity("login", result)
    }

    pub async fn register(&self, data: &RegisterRequest) -> AppResult<User> {
        data.validate()?;
        self.set_loading(true);
        let result = async {
            auth_service::register(&self.api, data).await?;
            auth_service::current_user(&self.api).await
        }
        .await;
        self.finish_identity("register", result)
    }

    /// Local session is cleared even when the logout call fails; that failure
    /// is only logged.
    pub async fn logout(&self) {
        if let Err(err) = auth_service::logout(&self.api).await {
            tracing::warn!(error = %err, "logout request failed");
        }
        self.state.send_modify(|state| {
            state.user = None;
            state.is_authenticated = false;
            state.is_loading = false;
        });
    }

    pub async fn update_profile(&self, data: &ProfileUpdate) -> AppResult<User> {
        self.set_loading(true);
        let result = async {
            profile_service::update_profile(&self.api, data).await?;
            auth_service::current_user(&self.api).await
        }
        .await;
        match result {
            Ok(user) => {
                self.state.send_modify(|state| {
                    state.user = Some(user.clone());
                    state.is_loading = false;
                });
                Ok(user)
            }
            Err(err) => {
                self.set_loading(false);
                tracing::error!(error = %err, "failed to update profile");
                Err(err)
            }
        }
    }

    fn finish_identity(&self, action: &'static str, result: AppResult<User>) -> AppResult<User> {
        match result {
            Ok(user) => {
                tracing::info!(user = %user.name, role = ?user.role, "{action} succeeded");
                self.settle(Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.set_loading(false);
                tracing::error!(error = %err, "{action} failed");
                Err(err)
            }
        }
    }

    fn settle(&self, user: Option<User>) {
        self.state.send_modify(|state| {
            state.is_authenticated = user.is_some();
            state.user = user;
            state.is_loading = false;
        });
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.is_loading = loading);
    }
}

use contracts::shared::rest::RestConfig;
use contracts::system::auth::{AuthUser, Session, SignUpOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Result of a sign-up request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    SignedIn,
    PendingConfirmation,
    AlreadyRegistered,
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
    /// True until the stored session has been checked
    pub restoring: bool,
}

/// Session owner. Created once in `App` and passed to whoever needs it.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    state: RwSignal<AuthState>,
    config: StoredValue<RestConfig>,
}

impl AuthHandle {
    pub fn new(config: RestConfig) -> Self {
        let handle = Self {
            state: RwSignal::new(AuthState {
                restoring: true,
                ..AuthState::default()
            }),
            config: StoredValue::new(config),
        };
        handle.restore();
        handle
    }

    fn config(&self) -> RestConfig {
        self.config.get_value()
    }

    /// Try to restore session from localStorage
    fn restore(&self) {
        let this = *self;
        spawn_local(async move {
            let config = this.config();
            let Some(access_token) = storage::get_access_token() else {
                this.state.update(|s| s.restoring = false);
                return;
            };

            match api::get_current_user(&config, &access_token).await {
                Ok(user) => {
                    log::debug!("Restored session for {}", user.id);
                    this.state.set(AuthState {
                        access_token: Some(access_token),
                        user: Some(user),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::debug!("Stored token rejected, trying refresh: {}", e);
                    let refreshed = match storage::get_refresh_token() {
                        Some(refresh_token) => api::refresh(&config, refresh_token).await.ok(),
                        None => None,
                    };
                    match refreshed {
                        Some(session) => this.apply_session(session),
                        None => {
                            storage::clear_tokens();
                            this.state.set(AuthState::default());
                        }
                    }
                }
            }
        });
    }

    fn apply_session(&self, session: Session) {
        storage::save_tokens(&session.access_token, &session.refresh_token);
        self.state.set(AuthState {
            access_token: Some(session.access_token),
            user: Some(session.user),
            restoring: false,
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn is_restoring(&self) -> bool {
        self.state.with(|s| s.restoring)
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn user_untracked(&self) -> Option<AuthUser> {
        self.state.with_untracked(|s| s.user.clone())
    }

    pub fn access_token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    /// Helper: Perform login
    pub async fn do_login(self, email: String, password: String) -> Result<AuthUser, String> {
        let session = api::sign_in(&self.config(), email, password).await?;
        let user = session.user.clone();
        self.apply_session(session);
        Ok(user)
    }

    pub async fn do_register(
        self,
        full_name: String,
        email: String,
        password: String,
        redirect_to: String,
    ) -> Result<RegisterOutcome, String> {
        match api::sign_up(&self.config(), email, password, full_name, &redirect_to).await? {
            SignUpOutcome::Session(session) => {
                self.apply_session(session);
                Ok(RegisterOutcome::SignedIn)
            }
            SignUpOutcome::PendingConfirmation(user) if user.is_already_registered() => {
                Ok(RegisterOutcome::AlreadyRegistered)
            }
            SignUpOutcome::PendingConfirmation(user) => {
                log::info!("Sign-up pending confirmation for {}", user.id);
                Ok(RegisterOutcome::PendingConfirmation)
            }
        }
    }

    pub async fn resend_verification(self, email: String) -> Result<(), String> {
        api::resend_verification(&self.config(), email).await
    }

    /// Helper: Perform logout. Local state is cleared even if the request fails.
    pub async fn do_logout(self) -> Result<(), String> {
        let result = match self.access_token_untracked() {
            Some(token) => api::sign_out(&self.config(), &token).await,
            None => Ok(()),
        };

        storage::clear_tokens();
        self.state.set(AuthState::default());

        result
    }
}

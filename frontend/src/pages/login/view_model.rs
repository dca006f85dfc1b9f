use gatekeeper_auth::{AuthError, Credentials};
use leptos::*;

use crate::pages::login::utils;
use crate::state::auth;

/// Message shown whenever an attempt is rejected. Every non-success
/// outcome collapses to this one string.
pub const WRONG_CREDENTIALS_MESSAGE: &str = "Wrong credentials, try again...";

/// Where the login flow currently stands. `LoggedIn` is terminal: the
/// screen defines no way back to the interactive states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Failed,
    LoggedIn(String),
}

/// Everything the screen needs to render, recomputed from the latest
/// field values and phase on every change. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub can_submit: bool,
    pub is_loading: bool,
    pub error_text: Option<String>,
    pub is_logged_in: bool,
    pub greeting: Option<String>,
}

/// Single reducer from the raw inputs to the derived UI state.
///
/// `can_submit` requires both fields non-empty and no attempt in
/// flight; submission gating checks this flag directly instead of
/// waiting for a disabled attribute to propagate to the DOM.
pub fn derive_form_state(username: &str, password: &str, phase: &LoginPhase) -> FormState {
    let fields_filled = !username.is_empty() && !password.is_empty();
    match phase {
        LoginPhase::Idle => FormState {
            can_submit: fields_filled,
            is_loading: false,
            error_text: None,
            is_logged_in: false,
            greeting: None,
        },
        LoginPhase::Submitting => FormState {
            can_submit: false,
            is_loading: true,
            error_text: None,
            is_logged_in: false,
            greeting: None,
        },
        // A failed attempt re-arms the form; the fields keep their values.
        LoginPhase::Failed => FormState {
            can_submit: fields_filled,
            is_loading: false,
            error_text: Some(WRONG_CREDENTIALS_MESSAGE.to_string()),
            is_logged_in: false,
            greeting: None,
        },
        LoginPhase::LoggedIn(name) => FormState {
            can_submit: false,
            is_loading: false,
            error_text: None,
            is_logged_in: true,
            greeting: Some(format!("Welcome back\n{}", utils::capitalize_first(name))),
        },
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub phase: RwSignal<LoginPhase>,
    pub state: Signal<FormState>,
    pub login_action: Action<Credentials, Result<String, AuthError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let phase = create_rw_signal(LoginPhase::Idle);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(name) => {
                    log::info!("login succeeded for '{name}'");
                    phase.set(LoginPhase::LoggedIn(name));
                }
                Err(AuthError::Unauthorized) => {
                    log::warn!("login attempt rejected");
                    phase.set(LoginPhase::Failed);
                }
            }
        }
    });

    let state = Signal::derive(move || {
        derive_form_state(&username.get(), &password.get(), &phase.get())
    });

    LoginViewModel {
        username,
        password,
        phase,
        state,
        login_action,
    }
}

impl LoginViewModel {
    /// Submission entry point. Ignored outright unless the derived
    /// state says submitting is allowed right now, so repeated clicks
    /// during an in-flight attempt (or after success) do nothing.
    pub fn submit(&self) {
        if !self.state.get_untracked().can_submit {
            return;
        }

        let credentials = Credentials::new(
            self.username.get_untracked(),
            self.password.get_untracked(),
        );
        self.phase.set(LoginPhase::Submitting);
        self.login_action.dispatch(credentials);
    }
}

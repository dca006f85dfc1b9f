use std::rc::Rc;

use gatekeeper_auth::{AuthError, AuthService, Credentials};
use leptos::*;

use crate::pages::login::repository::LoginRepository;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Who is signed in on this screen, if anyone. Reset only by leaving
/// the page; the login flow never transitions back out of a success.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub display_name: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(AuthState::default());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    credentials: Credentials,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<String, AuthError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&credentials).await {
        Ok(name) => {
            set_auth_state.update(|state| {
                state.display_name = Some(name.clone());
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(name)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Builds the login action over the repository. A checker other than
/// the default can be supplied by providing `Rc<AuthService>` as
/// context further up the tree.
pub fn use_login_action() -> Action<Credentials, Result<String, AuthError>> {
    let (_auth, set_auth) = use_auth();
    let service = use_context::<Rc<AuthService>>().unwrap_or_default();
    let repo = LoginRepository::new_with_service(service);

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.display_name.is_none());
            assert!(!snapshot.loading);
        });
    }
}

use std::time::Duration;

use crate::{AuthError, Credentials};

/// Credential checker: literal comparison against one configured pair,
/// resolved after an artificial delay.
///
/// The default instance accepts `steve` / `12345` and answers with the
/// display name `Steve` after one second. The pair is a placeholder;
/// swapping it (or the whole service, behind the frontend's login
/// repository) never requires touching the form controller.
#[derive(Debug, Clone)]
pub struct AuthService {
    expected: Credentials,
    display_name: String,
    delay: Duration,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new("steve", "12345", "Steve", Duration::from_secs(1))
    }
}

impl AuthService {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            expected: Credentials::new(username, password),
            display_name: display_name.into(),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Checks the submitted credentials after the configured delay.
    ///
    /// Exactly one outcome per call: `Ok(display_name)` on a match,
    /// `Err(Unauthorized)` otherwise. No retries, no timeout, no
    /// cancellation; once started the attempt always resolves.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        sleep(self.delay).await;

        if credentials.username == self.expected.username
            && credentials.password == self.expected.password
        {
            log::debug!("login accepted for user '{}'", credentials.username);
            Ok(self.display_name.clone())
        } else {
            log::debug!("login rejected for user '{}'", credentials.username);
            Err(AuthError::Unauthorized)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn known_pair_resolves_to_display_name() {
        let service = AuthService::default();
        let result = service.login(&Credentials::new("steve", "12345")).await;
        assert_eq!(result, Ok("Steve".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn every_other_pair_is_unauthorized() {
        let service = AuthService::default();
        let rejected = [
            ("steve", "wrong"),
            ("bob", "12345"),
            ("", "12345"),
            ("steve", ""),
            ("", ""),
            ("STEVE", "12345"),
        ];
        for (username, password) in rejected {
            let result = service.login(&Credentials::new(username, password)).await;
            assert_eq!(result, Err(AuthError::Unauthorized), "pair {username:?}/{password:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn result_arrives_only_after_the_configured_delay() {
        let service = AuthService::default();
        let started = tokio::time::Instant::now();
        let _ = service.login(&Credentials::new("steve", "12345")).await;
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn configured_pair_replaces_the_default() {
        let service = AuthService::new("ada", "s3cret", "Ada", Duration::from_millis(10));
        assert_eq!(
            service.login(&Credentials::new("ada", "s3cret")).await,
            Ok("Ada".to_string())
        );
        assert_eq!(
            service.login(&Credentials::new("steve", "12345")).await,
            Err(AuthError::Unauthorized)
        );
    }
}

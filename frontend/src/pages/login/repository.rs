use std::rc::Rc;

use gatekeeper_auth::{AuthError, AuthService, Credentials};

/// The only path from the form controller to the credential checker,
/// so the checker can be swapped (different pair, shorter delay, a
/// real backend one day) without touching the panel or view model.
#[derive(Clone)]
pub struct LoginRepository {
    service: Rc<AuthService>,
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_service(Rc::new(AuthService::default()))
    }

    pub fn new_with_service(service: Rc<AuthService>) -> Self {
        Self { service }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        self.service.login(credentials).await
    }
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

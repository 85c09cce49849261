//! Sign-in, sign-up and session management.

use store::{KeyValueStore, SessionUser};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, NewUser, SignInResponse, User};
use crate::validate;

impl<S: KeyValueStore> ApiClient<S> {
    /// Sign in and cache the token and user under the session keys.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, ApiError> {
        validate::email(&credentials.email)?;
        validate::require(&credentials.password, "password")?;

        let response: SignInResponse = self.post("/api/auth/signin", credentials).await?;
        self.session()
            .save_sign_in(&response.token, &response.user.to_session());
        Ok(response.user)
    }

    /// Register a new account. Does not sign the user in.
    pub async fn sign_up(&self, new_user: &NewUser) -> Result<User, ApiError> {
        validate::require(&new_user.name, "name")?;
        validate::email(&new_user.email)?;
        validate::require(&new_user.password, "password")?;
        validate::phone_vn(&new_user.phone)?;

        self.post("/api/auth/signup", new_user).await
    }

    /// Clear the session keys. Succeeds even when nothing was stored.
    pub fn logout(&self) {
        self.session().clear();
    }

    /// Synchronous presence check on the stored token.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// The cached projection of the signed-in user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.session().user()
    }
}

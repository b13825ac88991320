//! Authentication seam.
//!
//! Views never build a [`store::User`] themselves; they ask an
//! [`AuthProvider`]. The only implementation today is [`MockAuth`], which
//! accepts any non-empty input. A real backend can replace it without
//! touching the sign-in or sign-up forms.

use thiserror::Error;

use store::User;

mod mock;
pub use mock::MockAuth;

/// Rejection from an [`AuthProvider`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Turns credentials into a user record.
pub trait AuthProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
    fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

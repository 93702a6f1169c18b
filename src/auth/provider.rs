//! Identity provider collaborator.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{
    errors::AuthProviderError,
    models::{Account, Session},
};

/// External identity provider (email/password plus one federated flow).
///
/// The storefront consumes this interface only; any equivalent identity
/// service can stand behind it.
#[automock]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Creates an account and signs it in.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Account, AuthProviderError>;

    /// Signs in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthProviderError>;

    /// Signs in through the configured federated provider.
    async fn sign_in_federated(&self) -> Result<Session, AuthProviderError>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<(), AuthProviderError>;

    /// The current session, if one is active.
    async fn current_session(&self) -> Option<Session>;
}

//! Accounts service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::{
    auth::{
        errors::AuthError,
        models::{Account, AccountUuid, NewAccount, Role, Session},
        provider::AuthProvider,
    },
    domain::checkout::USERS_COLLECTION,
    notify::Notifier,
    remote::DocumentStore,
};

/// Outcome of a successful registration.
#[derive(Debug)]
pub struct RegisteredAccount {
    /// The new account.
    pub account: Account,

    /// Whether the profile document write failed and should be retried.
    pub sync_pending: bool,
}

/// Accounts: registration, sign-in, sign-out, and profile role lookup.
///
/// Wraps the [`AuthProvider`] collaborator and keeps the profile document
/// (`users/{uid}`) in the document store.
pub struct AccountsService {
    provider: Arc<dyn AuthProvider>,
    store: Arc<dyn DocumentStore>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for AccountsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsService").finish_non_exhaustive()
    }
}

impl AccountsService {
    /// Creates the service over its two collaborators.
    #[must_use]
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        store: Arc<dyn DocumentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            store,
            notifier,
        }
    }

    /// Registers a new account and merge-writes its profile document.
    ///
    /// A failed profile write does not undo the sign-up; it is reported and
    /// flagged as pending.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] when the provider rejects sign-up.
    #[tracing::instrument(name = "auth.register", skip(self, new), fields(email = %new.email), err)]
    pub async fn register(&self, new: NewAccount) -> Result<RegisteredAccount, AuthError> {
        let display_name = format!("{} {}", new.first_name, new.last_name);

        let account = match self
            .provider
            .sign_up(&new.email, &new.password, &display_name)
            .await
        {
            Ok(account) => account,
            Err(error) => {
                self.notifier.error(&error.to_string());
                return Err(error.into());
            }
        };

        let profile = json!({
            "first_name": new.first_name,
            "last_name": new.last_name,
            "email": new.email,
            "role": new.role,
        });

        let sync_pending = match self
            .store
            .set_document(USERS_COLLECTION, &account.uuid.to_string(), profile, true)
            .await
        {
            Ok(()) => {
                self.notifier.success("Account created!");
                false
            }
            Err(error) => {
                warn!(%error, account = %account.uuid, "profile write failed");
                self.notifier
                    .error("Account created, profile sync pending");
                true
            }
        };

        Ok(RegisteredAccount {
            account,
            sync_pending,
        })
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] on rejected credentials or an
    /// unreachable provider.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match self.provider.sign_in(email, password).await {
            Ok(session) => {
                self.notifier.success("Welcome back!");
                Ok(session)
            }
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error.into())
            }
        }
    }

    /// Signs in through the federated provider.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] when the flow fails.
    pub async fn login_federated(&self) -> Result<Session, AuthError> {
        match self.provider.sign_in_federated().await {
            Ok(session) => {
                self.notifier.success("Signed in!");
                Ok(session)
            }
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error.into())
            }
        }
    }

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] when sign-out fails.
    pub async fn logout(&self) -> Result<(), AuthError> {
        match self.provider.sign_out().await {
            Ok(()) => {
                self.notifier.success("Logged out!");
                Ok(())
            }
            Err(error) => {
                self.notifier.error(&error.to_string());
                Err(error.into())
            }
        }
    }

    /// The current session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.provider.current_session().await
    }

    /// The role stored on the account's profile document.
    ///
    /// Defaults to [`Role::User`] when the document is absent, malformed,
    /// or the read fails, never an error.
    pub async fn role_for(&self, account: AccountUuid) -> Role {
        let document = match self
            .store
            .get_document(USERS_COLLECTION, &account.to_string())
            .await
        {
            Ok(Some(document)) => document,
            Ok(None) => return Role::default(),
            Err(error) => {
                warn!(%error, account = %account, "role lookup failed");
                return Role::default();
            }
        };

        document
            .get("role")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        auth::{errors::AuthProviderError, provider::MockAuthProvider},
        notify::MockNotifier,
        remote::{MemoryDocumentStore, MockDocumentStore, RemoteSyncError},
    };

    use super::*;

    fn account() -> Account {
        Account {
            uuid: AccountUuid::generate(),
            email: "asha@example.com".to_owned(),
            display_name: "Asha Verma".to_owned(),
        }
    }

    fn new_account() -> NewAccount {
        NewAccount {
            email: "asha@example.com".to_owned(),
            password: "hunter2!".to_owned(),
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            role: Role::User,
        }
    }

    fn quiet_notifier() -> Arc<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().return_const(());
        notifier.expect_error().return_const(());

        Arc::new(notifier)
    }

    #[tokio::test]
    async fn register_writes_the_profile_document() -> TestResult {
        let fixed = account();
        let uuid = fixed.uuid;

        let mut provider = MockAuthProvider::new();
        provider
            .expect_sign_up()
            .returning(move |_, _, _| Ok(fixed.clone()));

        let store = Arc::new(MemoryDocumentStore::new());
        let service = AccountsService::new(Arc::new(provider), store.clone(), quiet_notifier());

        let registered = service.register(new_account()).await?;

        assert!(!registered.sync_pending);

        let doc = store
            .get_document(USERS_COLLECTION, &uuid.to_string())
            .await?;
        assert_eq!(
            doc.as_ref().and_then(|d| d.get("role")),
            Some(&json!("user"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_survives_a_failed_profile_write() -> TestResult {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_sign_up()
            .returning(|_, _, _| Ok(account()));

        let mut store = MockDocumentStore::new();
        store
            .expect_set_document()
            .returning(|_, _, _, _| Err(RemoteSyncError::Unavailable));

        let service = AccountsService::new(Arc::new(provider), Arc::new(store), quiet_notifier());

        let registered = service.register(new_account()).await?;

        assert!(registered.sync_pending, "failed write must be reported");

        Ok(())
    }

    #[tokio::test]
    async fn login_failure_propagates_the_provider_error() {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_sign_in()
            .returning(|_, _| Err(AuthProviderError::InvalidCredentials));

        let service = AccountsService::new(
            Arc::new(provider),
            Arc::new(MemoryDocumentStore::new()),
            quiet_notifier(),
        );

        let result = service.login("asha@example.com", "wrong").await;

        assert_eq!(
            result,
            Err(AuthError::Provider(AuthProviderError::InvalidCredentials))
        );
    }

    #[tokio::test]
    async fn role_defaults_to_user_on_missing_document() {
        let provider = MockAuthProvider::new();
        let service = AccountsService::new(
            Arc::new(provider),
            Arc::new(MemoryDocumentStore::new()),
            quiet_notifier(),
        );

        let role = service.role_for(AccountUuid::generate()).await;

        assert_eq!(role, Role::User);
    }

    #[tokio::test]
    async fn role_reads_admin_from_the_profile() -> TestResult {
        let uuid = AccountUuid::generate();

        let store = Arc::new(MemoryDocumentStore::new());
        store
            .set_document(
                USERS_COLLECTION,
                &uuid.to_string(),
                json!({"role": "admin"}),
                false,
            )
            .await?;

        let service =
            AccountsService::new(Arc::new(MockAuthProvider::new()), store, quiet_notifier());

        assert_eq!(service.role_for(uuid).await, Role::Admin);

        Ok(())
    }
}

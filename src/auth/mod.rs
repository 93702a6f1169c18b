//! Authentication
//!
//! The identity provider is an external collaborator behind the
//! [`AuthProvider`] trait; the core never calls a concrete SDK.
//! [`AccountsService`] layers profile documents and role lookup on top.

mod errors;
mod models;
mod provider;
mod service;

pub use errors::{AuthError, AuthProviderError};
pub use models::{Account, AccountUuid, NewAccount, Role, Session};
pub use provider::{AuthProvider, MockAuthProvider};
pub use service::{AccountsService, RegisteredAccount};

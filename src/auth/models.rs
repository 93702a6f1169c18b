//! Account Models

use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Account UUID
pub type AccountUuid = TypedUuid<Account>;

/// A signed-up identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Provider-issued identifier.
    pub uuid: AccountUuid,

    /// Sign-in email.
    pub email: String,

    /// Display name shown in the UI.
    pub display_name: String,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The signed-in account.
    pub account: Account,
}

/// Access role stored on the profile document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    User,

    /// Admin dashboard access.
    Admin,
}

/// Registration form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Sign-in email.
    pub email: String,

    /// Plain-text password, handed straight to the provider.
    pub password: String,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Requested role.
    pub role: Role,
}

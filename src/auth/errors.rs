//! Auth errors.

use thiserror::Error;

/// Failures reported by the external identity provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthProviderError {
    /// Email/password pair was not accepted.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An account already exists for the email.
    #[error("an account already exists for this email")]
    EmailTaken,

    /// The provider rejected the password.
    #[error("password rejected: {0}")]
    WeakPassword(String),

    /// The provider could not be reached.
    #[error("authentication service unavailable")]
    Unavailable,
}

/// Account service errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Wrapped provider failure.
    #[error(transparent)]
    Provider(#[from] AuthProviderError),
}

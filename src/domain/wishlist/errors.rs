//! Wishlist errors.

use thiserror::Error;

use crate::remote::RemoteSyncError;

/// Wishlist operation errors.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// Wishlist edits require a signed-in account.
    #[error("please login to manage your wishlist")]
    NotSignedIn,

    /// The remote write failed; the local change already stands.
    #[error(transparent)]
    Sync(#[from] RemoteSyncError),
}
